//! Derived metrics: reading time and per-sentence / per-word averages.
//!
//! Ratios return `0.0` instead of `NaN` or infinity when the divisor would
//! be zero.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::text;

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 250.0;

/// Formatted reading time returned for an unusable reading speed.
pub const ZERO_READING_TIME: &str = "0m 0s";

/// A reading time split into whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTime {
    /// Whole days.
    pub days: u64,
    /// Hours past the last whole day (0-23).
    pub hours: u64,
    /// Minutes past the last whole hour (0-59).
    pub minutes: u64,
    /// Seconds past the last whole minute (0-59), rounded.
    pub seconds: u64,
}

impl ReadingTime {
    /// Break a duration in fractional minutes into units.
    ///
    /// Seconds are rounded to the nearest whole second; a rounded value of
    /// 60 carries into the minutes.
    pub fn from_minutes(total_minutes: f64) -> Self {
        if total_minutes <= 0.0 || !total_minutes.is_finite() {
            return Self::default();
        }

        let whole = total_minutes.floor();
        let mut seconds = ((total_minutes - whole) * 60.0).round() as u64;
        let mut minutes = whole as u64;
        if seconds >= 60 {
            seconds = 0;
            minutes += 1;
        }

        Self {
            days: minutes / 1440,
            hours: (minutes % 1440) / 60,
            minutes: minutes % 60,
            seconds,
        }
    }
}

impl fmt::Display for ReadingTime {
    /// Shows the two largest applicable units: `1d 2h`, `3h 4m`, or `5m 6s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d {}h", self.days, self.hours)
        } else if self.hours > 0 {
            write!(f, "{}h {}m", self.hours, self.minutes)
        } else {
            write!(f, "{}m {}s", self.minutes, self.seconds)
        }
    }
}

fn usable_speed(words_per_minute: f64) -> bool {
    words_per_minute > 0.0 && words_per_minute.is_finite()
}

/// Reading time in fractional minutes.
///
/// Returns `0.0` when `words_per_minute` is zero, negative, or not finite.
pub fn reading_time_minutes(text: &str, words_per_minute: f64) -> f64 {
    if !usable_speed(words_per_minute) {
        return 0.0;
    }
    text::word_count(text) as f64 / words_per_minute
}

/// Reading time formatted with its two largest units.
///
/// Returns [`ZERO_READING_TIME`] when `words_per_minute` is zero, negative,
/// or not finite.
pub fn reading_time_readable(text: &str, words_per_minute: f64) -> String {
    if !usable_speed(words_per_minute) {
        return ZERO_READING_TIME.to_string();
    }
    ReadingTime::from_minutes(reading_time_minutes(text, words_per_minute)).to_string()
}

/// Mean number of words per sentence.
pub fn average_words_per_sentence(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    let sentences = text::sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }
    text::word_count(text) as f64 / sentences as f64
}

/// Mean number of non-whitespace characters per word.
pub fn average_chars_per_word(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    let words = text::word_count(text);
    if words == 0 {
        return 0.0;
    }
    classify::char_count_no_spaces(text) as f64 / words as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minute_at_default_speed() {
        let text = "word ".repeat(250);
        assert_eq!(reading_time_minutes(&text, 250.0), 1.0);
        assert_eq!(reading_time_readable(&text, 250.0), "1m 0s");
    }

    #[test]
    fn half_minute() {
        let text = "word ".repeat(125);
        assert_eq!(reading_time_readable(&text, DEFAULT_WORDS_PER_MINUTE), "0m 30s");
    }

    #[test]
    fn unusable_speed_returns_sentinel() {
        assert_eq!(reading_time_readable("some words here", 0.0), ZERO_READING_TIME);
        assert_eq!(reading_time_readable("some words here", -10.0), ZERO_READING_TIME);
        assert_eq!(reading_time_readable("some words here", f64::NAN), ZERO_READING_TIME);
        assert_eq!(reading_time_minutes("some words here", 0.0), 0.0);
    }

    #[test]
    fn empty_text_reads_instantly() {
        assert_eq!(reading_time_readable("", 250.0), "0m 0s");
    }

    #[test]
    fn seconds_carry_into_minutes() {
        let time = ReadingTime::from_minutes(1.999);
        assert_eq!((time.minutes, time.seconds), (2, 0));
        assert_eq!(time.to_string(), "2m 0s");
    }

    #[test]
    fn hours_and_days() {
        assert_eq!(ReadingTime::from_minutes(90.0).to_string(), "1h 30m");
        assert_eq!(ReadingTime::from_minutes(1500.0).to_string(), "1d 1h");
        assert_eq!(
            ReadingTime::from_minutes(59.9999),
            ReadingTime {
                days: 0,
                hours: 1,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn averages() {
        let text = "One two three. Four five six seven.";
        assert!((average_words_per_sentence(text) - 3.5).abs() < f64::EPSILON);
        // 29 non-whitespace chars over 7 words
        assert!((average_chars_per_word(text) - 29.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn averages_guard_division_by_zero() {
        assert_eq!(average_words_per_sentence(""), 0.0);
        assert_eq!(average_words_per_sentence("   "), 0.0);
        assert_eq!(average_words_per_sentence("..."), 0.0);
        assert_eq!(average_chars_per_word(""), 0.0);
        assert_eq!(average_chars_per_word("!!! ???"), 0.0);
        assert!(average_words_per_sentence("x").is_finite());
    }
}
