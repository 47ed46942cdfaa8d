use std::fmt;

use crate::duration::SpeakingTime;
use crate::rate::WordsPerMinute;

const RULE: &str = "--------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub words: u64,
    pub words_per_minute: WordsPerMinute,
    pub time: SpeakingTime,
}

impl Report {
    pub fn new(words: u64, words_per_minute: WordsPerMinute) -> Self {
        Self {
            words,
            words_per_minute,
            time: SpeakingTime::estimate(words, words_per_minute),
        }
    }
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SpeakingTime {
            hours,
            minutes,
            seconds,
        } = self.time;

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Word Count Analysis")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total number of words: {}", self.words)?;
        writeln!(f, "Words Per Minute (WPM): {}", self.words_per_minute)?;
        writeln!(f, "Estimated Speaking Time:")?;
        if hours > 0 {
            writeln!(f, "\t{hours} hour{}", plural(hours))?;
        }
        writeln!(f, "\t{minutes} minute{}", plural(minutes))?;
        writeln!(f, "\t{seconds} second{}", plural(seconds))?;
        writeln!(f, "{RULE}")
    }
}
