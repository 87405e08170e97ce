//! Full text report combining every metric.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::CharacterCounts;
use crate::frequency::{self, FrequencyEntry};
use crate::metrics::{self, DEFAULT_WORDS_PER_MINUTE, ReadingTime};
use crate::passive::{self, PassiveVoiceBand};
use crate::readability::{self, ReadabilityReport};
use crate::text;

/// Default number of entries in [`TextReport::top_words`].
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Knobs for [`TextReport::analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Reading speed used for the reading time.
    pub words_per_minute: f64,
    /// How many of the most frequent words to include.
    pub top_words: usize,
    /// Leave stop words out of the top words.
    pub exclude_stop_words: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            top_words: DEFAULT_TOP_WORDS,
            exclude_stop_words: false,
        }
    }
}

/// Reading time in both raw and formatted form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadingTimeSummary {
    /// Reading speed used.
    pub words_per_minute: f64,
    /// Fractional minutes.
    pub minutes: f64,
    /// Unit breakdown.
    pub breakdown: ReadingTime,
    /// Formatted, e.g. `"3m 12s"`.
    pub readable: String,
}

/// Passive voice summary; see [`passive::check_passive_voice`] for the
/// sentence-level detail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PassiveSummary {
    /// Passive sentences as a percentage (2 decimals).
    pub percentage: f64,
    /// Band for the percentage.
    pub band: PassiveVoiceBand,
    /// Short label for the band.
    pub label: String,
}

/// Every metric for one text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TextReport {
    /// Character classification counts.
    pub characters: CharacterCounts,
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of paragraphs.
    pub paragraphs: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// The most frequent word.
    pub most_common: Option<FrequencyEntry>,
    /// The most frequent words, most frequent first.
    pub top_words: Vec<FrequencyEntry>,
    /// Reading time.
    pub reading_time: ReadingTimeSummary,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Mean non-whitespace characters per word.
    pub average_chars_per_word: f64,
    /// Passive voice share.
    pub passive_voice: PassiveSummary,
    /// Readability scores; absent when there is nothing to score.
    pub readability: Option<ReadabilityReport>,
}

impl TextReport {
    /// Compute every metric for `text`.
    ///
    /// The frequency table is built once and shared by the unique word
    /// count, the most common word, and the top words.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(text: &str, options: &ReportOptions) -> Self {
        let table = frequency::frequency(text);
        let ranked = if options.exclude_stop_words {
            frequency::filter_stop_words(&table)
        } else {
            table.clone()
        };

        let minutes = metrics::reading_time_minutes(text, options.words_per_minute);
        let percentage = passive::passive_voice_percentage(text);
        let band = PassiveVoiceBand::from_percentage(percentage);

        Self {
            characters: CharacterCounts::from_text(text),
            words: text::word_count(text),
            sentences: text::sentence_count(text),
            paragraphs: text::paragraph_count(text),
            unique_words: frequency::unique_word_count(&table),
            most_common: frequency::most_common(&ranked).cloned(),
            top_words: ranked.into_iter().take(options.top_words).collect(),
            reading_time: ReadingTimeSummary {
                words_per_minute: options.words_per_minute,
                minutes,
                breakdown: ReadingTime::from_minutes(minutes),
                readable: metrics::reading_time_readable(text, options.words_per_minute),
            },
            average_words_per_sentence: metrics::average_words_per_sentence(text),
            average_chars_per_word: metrics::average_chars_per_word(text),
            passive_voice: PassiveSummary {
                percentage,
                band,
                label: band.label().to_string(),
            },
            readability: readability::score(text),
        }
    }
}
