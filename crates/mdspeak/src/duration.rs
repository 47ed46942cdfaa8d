use crate::rate::WordsPerMinute;

const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Speaking time split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeakingTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub fn estimated_minutes(words: u64, words_per_minute: WordsPerMinute) -> f64 {
    words as f64 / f64::from(words_per_minute.get())
}

impl SpeakingTime {
    /// Every conversion truncates toward zero.
    ///
    /// Hours are only split off when the estimate is strictly greater than
    /// sixty minutes, so exactly one hour reports as `0h 60m`. Seconds are
    /// taken from the estimate minus the whole minutes only, so once hours
    /// are present they carry the hours as well (`60.0067` minutes reports
    /// as `1h 0m 3600s`).
    pub fn estimate(words: u64, words_per_minute: WordsPerMinute) -> Self {
        let estimated = estimated_minutes(words, words_per_minute);

        let hours = if estimated > MINUTES_PER_HOUR {
            (estimated / MINUTES_PER_HOUR) as u32
        } else {
            0
        };

        let minutes = (estimated - f64::from(hours) * MINUTES_PER_HOUR) as u32;
        // Only the whole minutes are removed, not the hours.
        let seconds = ((estimated - f64::from(minutes)) * SECONDS_PER_MINUTE) as u32;

        Self {
            hours,
            minutes,
            seconds,
        }
    }
}
