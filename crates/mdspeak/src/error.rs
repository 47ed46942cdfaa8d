use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

#[derive(Debug, Error)]
pub enum SpeakError {
    #[error("invalid arguments: {0}")]
    Usage(String),

    #[error("invalid speed '{0}': expected a positive number of words per minute")]
    InvalidRate(String),

    #[error("unable to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SpeakError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) | Self::InvalidRate(_) | Self::FileOpen { .. } | Self::Io(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Usage failures are followed by the help text.
    pub fn wants_help(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

pub type SpeakResult<T> = Result<T, SpeakError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_maps_to_exit_code_one() {
        let errors = [
            SpeakError::Usage("unknown option '-x'".into()),
            SpeakError::InvalidRate("abc".into()),
            SpeakError::FileOpen {
                path: PathBuf::from("missing.md"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        ];

        for err in &errors {
            assert_eq!(err.exit_code() as u8, 1);
        }
    }

    #[test]
    fn only_usage_errors_print_help() {
        assert!(SpeakError::Usage("x".into()).wants_help());
        assert!(!SpeakError::InvalidRate("0".into()).wants_help());
    }

    #[test]
    fn file_open_message_names_the_path() {
        let err = SpeakError::FileOpen {
            path: PathBuf::from("notes/talk.md"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("unable to open notes/talk.md"));
    }
}
