use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::rate::{Preset, WordsPerMinute};
use crate::{SpeakError, SpeakResult};

const SPEED_FLAG: &str = "-s";

pub const HELP: &str = "\
Markdown Speaking Time Estimator - mdspeak

This program estimates the speaking time required to read aloud the content of a markdown file.

Usage: mdspeak <FILE_PATH> [OPTIONS]

Arguments:
  <FILE_PATH>    Path to the markdown file to be analyzed ('-' reads standard input).

Options:
  -n             Estimate speaking time at a normal speed (150 words per minute).
  -m             Estimate speaking time at a medium speed (175 words per minute).
  -f             Estimate speaking time at a fast speed (200 words per minute).
  -s <SPEED>     Estimate speaking time at a custom speed specified in words per minute.

Examples:
  mdspeak file.md
  mdspeak file.md -n
  mdspeak file.md -m
  mdspeak file.md -f
  mdspeak file.md -s 180

Notes:
  - If no speed option is provided, the default speed is 200 words per minute.
  - Ensure the file path is correct and accessible.
  - The program ignores code blocks, headings, and quotes while counting words.
  - Valid words contain only alphanumeric characters, single quotes, double quotes, and hyphens.
";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub words_per_minute: WordsPerMinute,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>, words_per_minute: WordsPerMinute) -> Self {
        Self {
            path: path.into(),
            words_per_minute,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The shape of the command line, decided by argument count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    NoArgs,
    PathOnly(PathBuf),
    PathAndPreset(PathBuf, Preset),
    PathAndCustomRate(PathBuf, WordsPerMinute),
    /// More arguments than any form accepts.
    Overflow,
}

impl Invocation {
    /// Interprets the arguments that follow the program name.
    ///
    /// The file path always comes first. `NoArgs` and `Overflow` are not
    /// errors: both print the help text and exit successfully.
    pub fn parse<S: AsRef<OsStr>>(args: &[S]) -> SpeakResult<Self> {
        match args {
            [] => Ok(Self::NoArgs),
            [path] => Ok(Self::PathOnly(to_path(path))),
            [path, flag] => {
                let flag = flag.as_ref().to_string_lossy();
                let preset = Preset::from_flag(&flag)
                    .ok_or_else(|| SpeakError::Usage(format!("unrecognized option '{flag}'")))?;
                Ok(Self::PathAndPreset(to_path(path), preset))
            }
            [path, flag, rate] => {
                let flag = flag.as_ref().to_string_lossy();
                if flag != SPEED_FLAG {
                    return Err(SpeakError::Usage(format!(
                        "expected '{SPEED_FLAG} <SPEED>', found '{flag}'"
                    )));
                }
                let rate = WordsPerMinute::parse_custom(&rate.as_ref().to_string_lossy())?;
                Ok(Self::PathAndCustomRate(to_path(path), rate))
            }
            _ => Ok(Self::Overflow),
        }
    }

    /// Returns the run configuration, or `None` when only help should be shown.
    pub fn config(&self) -> Option<Config> {
        match self {
            Self::NoArgs | Self::Overflow => None,
            Self::PathOnly(path) => Some(Config::new(path, WordsPerMinute::default())),
            Self::PathAndPreset(path, preset) => {
                Some(Config::new(path, preset.words_per_minute()))
            }
            Self::PathAndCustomRate(path, rate) => Some(Config::new(path, *rate)),
        }
    }
}

fn to_path<S: AsRef<OsStr>>(arg: &S) -> PathBuf {
    PathBuf::from(arg.as_ref())
}
