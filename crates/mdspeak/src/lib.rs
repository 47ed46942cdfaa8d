//! Estimate how long a markdown document takes to read aloud.
//!
//! The scanner walks the document line by line, skipping fenced code blocks,
//! headings and block quotes, and counts the remaining tokens that look like
//! words. The count is turned into a [`SpeakingTime`] at a chosen
//! [`WordsPerMinute`] rate and rendered as a [`Report`].

mod args;
mod duration;
mod error;
mod line;
mod rate;
mod report;
mod state;
mod word;

pub use args::{Config, Invocation, HELP};
pub use duration::{estimated_minutes, SpeakingTime};
pub use error::{ExitCode, SpeakError, SpeakResult};
pub use line::{LineRecord, Lines};
pub use rate::{Preset, WordsPerMinute};
pub use report::Report;
pub use state::{LineKind, Region, ScanState};
pub use word::{count_words, is_word, tokens};

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

const STDIN_PATH: &str = "-";

/// Totals gathered while scanning one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub words: u64,
    pub lines: usize,
    pub prose_lines: usize,
    pub skipped_lines: usize,
    pub fences: usize,
}

impl ScanSummary {
    fn record(&mut self, kind: LineKind, words: u64) {
        self.lines += 1;
        match kind {
            LineKind::Prose => {
                self.prose_lines += 1;
                self.words += words;
            }
            LineKind::Fence => self.fences += 1,
            LineKind::Code | LineKind::Heading | LineKind::Quote => self.skipped_lines += 1,
        }
    }
}

pub fn count_words_from_reader<R: BufRead>(reader: R) -> io::Result<ScanSummary> {
    let mut state = ScanState::new();
    let mut summary = ScanSummary::default();

    for line in Lines::new(reader) {
        let line = line?;
        let kind = state.classify(&line.raw);

        if kind == LineKind::Fence {
            log::debug!(
                "fence at bytes {}..{}: now in {:?}",
                line.start,
                line.end,
                state.region()
            );
        }

        let words = if kind.is_prose() {
            count_words(&line.raw)
        } else {
            0
        };
        summary.record(kind, words);
    }

    if state.region() == Region::CodeBlock {
        log::debug!("document ended inside an unclosed code block");
    }

    Ok(summary)
}

/// Scans the document at `path`, or standard input when `path` is `-`.
///
/// The file is closed before this returns.
pub fn count_words_from_path(path: &Path) -> SpeakResult<ScanSummary> {
    let summary = if path == Path::new(STDIN_PATH) {
        let stdin = io::stdin();
        count_words_from_reader(BufReader::new(stdin.lock()))?
    } else {
        let file = File::open(path).map_err(|source| SpeakError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        count_words_from_reader(BufReader::new(file))?
    };

    log::info!(
        "{}: {} words across {} prose lines ({} lines, {} skipped, {} fences)",
        path.display(),
        summary.words,
        summary.prose_lines,
        summary.lines,
        summary.skipped_lines,
        summary.fences
    );

    Ok(summary)
}

/// Scans the configured document and builds its report.
pub fn estimate(config: &Config) -> SpeakResult<Report> {
    let summary = count_words_from_path(config.path())?;
    Ok(Report::new(summary.words, config.words_per_minute))
}
