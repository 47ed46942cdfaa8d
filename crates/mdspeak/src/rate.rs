use std::fmt;
use std::num::NonZeroU32;

use crate::{SpeakError, SpeakResult};

/// Named speaking speeds selectable with a single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Normal,
    Medium,
    Fast,
}

const NORMAL_WPM: NonZeroU32 = preset_rate(150);
const MEDIUM_WPM: NonZeroU32 = preset_rate(175);
const FAST_WPM: NonZeroU32 = preset_rate(200);

const fn preset_rate(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(rate) => rate,
        None => panic!("preset rate must be non-zero"),
    }
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Normal, Preset::Medium, Preset::Fast];

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.flag() == flag)
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Normal => "-n",
            Self::Medium => "-m",
            Self::Fast => "-f",
        }
    }

    pub fn words_per_minute(self) -> WordsPerMinute {
        WordsPerMinute(match self {
            Self::Normal => NORMAL_WPM,
            Self::Medium => MEDIUM_WPM,
            Self::Fast => FAST_WPM,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordsPerMinute(NonZeroU32);

impl WordsPerMinute {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Parses the value given to `-s`.
    ///
    /// Only the leading integer is read, so `180wpm` is 180 and `1.5` is 1.
    /// Input without leading digits reads as zero. Zero, negative and
    /// out-of-range values are rejected.
    pub fn parse_custom(input: &str) -> SpeakResult<Self> {
        leading_integer(input)
            .and_then(|value| u32::try_from(value).ok())
            .and_then(Self::new)
            .ok_or_else(|| SpeakError::InvalidRate(input.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Reads an optionally signed run of digits after leading whitespace.
/// `None` when the digits overflow.
fn leading_integer(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, unsigned) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let end = unsigned
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return Some(0);
    }

    let value: i64 = unsigned[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

impl Default for WordsPerMinute {
    fn default() -> Self {
        Preset::Fast.words_per_minute()
    }
}

impl fmt::Display for WordsPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
