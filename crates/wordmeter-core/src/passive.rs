//! Passive voice detection.
//!
//! A sentence counts as passive when an auxiliary ("was", "has been",
//! "will have been", ...) is followed, within a few words and with only
//! adverbs in between, by a past participle. This is a pattern heuristic,
//! not a parse: "She was tired" is reported as passive.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::participles::{
    ADVERBS, AUXILIARIES, AUXILIARY_PHRASES, is_past_participle,
};
use crate::text;

/// How far past the auxiliary the participle may appear.
const MAX_LOOKAHEAD: usize = 5;

/// Longest auxiliary phrase, in words.
const MAX_AUXILIARY_WORDS: usize = 3;

/// The auxiliary and participle that made a sentence passive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveConstruction {
    /// The auxiliary (one to three words, e.g. "has been").
    pub auxiliary: String,
    /// The past participle (e.g. "written").
    pub participle: String,
}

/// A sentence flagged as passive.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PassiveSentence {
    /// The sentence number (1-indexed).
    pub sentence_num: usize,
    /// The sentence text.
    pub text: String,
    /// The construction that was matched.
    pub construction: PassiveConstruction,
}

/// Find the first passive construction in a sentence.
pub fn find_passive_construction(sentence: &str) -> Option<PassiveConstruction> {
    let words = text::tokenize_lowercase(sentence);

    for start in 0..words.len() {
        for size in (1..=MAX_AUXILIARY_WORDS).rev() {
            let end = start + size;
            if end > words.len() {
                continue;
            }
            let candidate = words[start..end].join(" ");
            let is_auxiliary = if size == 1 {
                AUXILIARIES.contains(candidate.as_str())
            } else {
                AUXILIARY_PHRASES.contains(candidate.as_str())
            };
            if !is_auxiliary {
                continue;
            }
            if let Some(participle) = participle_after(&words, end) {
                return Some(PassiveConstruction {
                    auxiliary: candidate,
                    participle: participle.to_string(),
                });
            }
        }
    }

    None
}

/// Scan past any adverbs; the first other word decides.
fn participle_after(words: &[String], from: usize) -> Option<&str> {
    let until = (from + MAX_LOOKAHEAD).min(words.len());
    for word in &words[from..until] {
        if ADVERBS.contains(word.as_str()) {
            continue;
        }
        return is_past_participle(word).then_some(word.as_str());
    }
    None
}

/// Whether a single sentence reads as passive.
pub fn is_passive_sentence(sentence: &str) -> bool {
    find_passive_construction(sentence).is_some()
}

/// Percentage of sentences that are passive, rounded to two decimals.
///
/// Returns `0.0` for text without sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn passive_voice_percentage(text: &str) -> f64 {
    let sentences = text::segment(text);
    let passive = sentences.iter().filter(|s| is_passive_sentence(s)).count();
    percentage(passive, sentences.len())
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Qualitative band for a passive voice percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PassiveVoiceBand {
    /// Exactly 0%.
    None,
    /// Up to 5%.
    Minimal,
    /// Up to 10%.
    Low,
    /// Up to 15%.
    Moderate,
    /// Up to 25%.
    Noticeable,
    /// Up to 35%.
    High,
    /// Above 35%.
    Excessive,
}

impl PassiveVoiceBand {
    /// Upper bound (inclusive) of each band, lowest first. Anything above
    /// the last bound is [`PassiveVoiceBand::Excessive`].
    pub const THRESHOLDS: [(f64, Self); 6] = [
        (0.0, Self::None),
        (5.0, Self::Minimal),
        (10.0, Self::Low),
        (15.0, Self::Moderate),
        (25.0, Self::Noticeable),
        (35.0, Self::High),
    ];

    /// Band containing `percentage`.
    pub fn from_percentage(percentage: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| percentage <= *bound)
            .map_or(Self::Excessive, |&(_, band)| band)
    }

    /// Short label for the band.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No passive voice",
            Self::Minimal => "Minimal passive voice",
            Self::Low => "Low passive voice",
            Self::Moderate => "Moderate passive voice",
            Self::Noticeable => "Noticeable passive voice",
            Self::High => "High passive voice",
            Self::Excessive => "Excessive passive voice",
        }
    }

    /// Extended guidance for the band.
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => {
                "Every sentence is in the active voice. Your writing is direct and \
                 makes clear who is doing what."
            }
            Self::Minimal => {
                "Only a small share of sentences use the passive voice. This is well \
                 within the range of clear, direct writing."
            }
            Self::Low => {
                "Passive voice appears occasionally. That is acceptable for most \
                 writing, but check that each use is deliberate."
            }
            Self::Moderate => {
                "Passive voice is starting to show. Consider rewriting some sentences \
                 so the subject performs the action."
            }
            Self::Noticeable => {
                "A noticeable share of sentences are passive. Readers may lose track of \
                 who is acting; rewrite where the actor matters."
            }
            Self::High => {
                "Passive voice is frequent. The text may feel indirect or evasive; \
                 rewrite most passive sentences in the active voice."
            }
            Self::Excessive => {
                "More than a third of sentences are passive. The writing is likely hard \
                 to follow; restructure sentences to lead with the actor."
            }
        }
    }
}

/// Short label for the passive voice share of `text`.
pub fn passive_voice_description(text: &str) -> &'static str {
    PassiveVoiceBand::from_percentage(passive_voice_percentage(text)).label()
}

/// Extended guidance for the passive voice share of `text`.
pub fn passive_voice_extended_description(text: &str) -> &'static str {
    PassiveVoiceBand::from_percentage(passive_voice_percentage(text)).description()
}

/// Passive voice analysis of a whole text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceReport {
    /// Total number of sentences analyzed.
    pub sentence_count: usize,
    /// Number of passive sentences.
    pub passive_count: usize,
    /// Passive sentences as a percentage of all sentences (2 decimals).
    pub percentage: f64,
    /// Qualitative band for the percentage.
    pub band: PassiveVoiceBand,
    /// Short label for the band.
    pub label: String,
    /// Extended guidance for the band.
    pub description: String,
    /// The passive sentences, in order.
    pub sentences: Vec<PassiveSentence>,
    /// Maximum acceptable percentage (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive_max: Option<f64>,
    /// Whether the percentage exceeds the maximum.
    pub over_max: bool,
}

/// Analyze passive voice across `text`.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `passive_max` - Optional maximum acceptable percentage.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_passive_voice(text: &str, passive_max: Option<f64>) -> PassiveVoiceReport {
    let sentences = text::segment(text);
    let flagged: Vec<PassiveSentence> = sentences
        .iter()
        .enumerate()
        .filter_map(|(idx, sentence)| {
            find_passive_construction(sentence).map(|construction| PassiveSentence {
                sentence_num: idx + 1,
                text: sentence.clone(),
                construction,
            })
        })
        .collect();

    let percentage = percentage(flagged.len(), sentences.len());
    let band = PassiveVoiceBand::from_percentage(percentage);
    tracing::debug!(
        sentences = sentences.len(),
        passive = flagged.len(),
        percentage,
        "passive voice analyzed"
    );

    PassiveVoiceReport {
        sentence_count: sentences.len(),
        passive_count: flagged.len(),
        percentage,
        band,
        label: band.label().to_string(),
        description: band.description().to_string(),
        sentences: flagged,
        passive_max,
        over_max: passive_max.is_some_and(|max| percentage > max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_sentence_is_not_passive() {
        assert_eq!(passive_voice_percentage("The cat sat on the mat."), 0.0);
        assert!(!is_passive_sentence("She wrote the report."));
    }

    #[test]
    fn simple_passive() {
        let construction = find_passive_construction("The report was written by the team.")
            .expect("passive construction");
        assert_eq!(construction.auxiliary, "was");
        assert_eq!(construction.participle, "written");
    }

    #[test]
    fn regular_participle() {
        assert!(is_passive_sentence("The bug was fixed yesterday."));
    }

    #[test]
    fn multi_word_auxiliary_wins() {
        let construction =
            find_passive_construction("The house has been painted.").expect("passive");
        assert_eq!(construction.auxiliary, "has been");
        assert_eq!(construction.participle, "painted");

        let construction =
            find_passive_construction("It will have been finished by then.").expect("passive");
        assert_eq!(construction.auxiliary, "will have been");
    }

    #[test]
    fn adverbs_are_skipped() {
        let construction =
            find_passive_construction("The code was quickly and carefully reviewed.");
        // "and" is not an adverb, so the scan stops there.
        assert!(construction.is_none());

        let construction =
            find_passive_construction("The code was very carefully reviewed.").expect("passive");
        assert_eq!(construction.participle, "reviewed");
    }

    #[test]
    fn lookahead_is_bounded() {
        assert!(!is_passive_sentence(
            "It was not never always already just still finished."
        ));
    }

    #[test]
    fn auxiliary_without_participle() {
        assert!(!is_passive_sentence("The sky is blue."));
        assert!(!is_passive_sentence("They were here."));
    }

    #[test]
    fn percentage_is_rounded() {
        let text = "The code was written. The team celebrated. The bug was fixed.";
        assert_eq!(passive_voice_percentage(text), 66.67);
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(passive_voice_percentage(""), 0.0);
        assert_eq!(check_passive_voice("", None).sentence_count, 0);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(PassiveVoiceBand::from_percentage(0.0), PassiveVoiceBand::None);
        assert_eq!(PassiveVoiceBand::from_percentage(0.01), PassiveVoiceBand::Minimal);
        assert_eq!(PassiveVoiceBand::from_percentage(5.0), PassiveVoiceBand::Minimal);
        assert_eq!(PassiveVoiceBand::from_percentage(5.01), PassiveVoiceBand::Low);
        assert_eq!(PassiveVoiceBand::from_percentage(10.0), PassiveVoiceBand::Low);
        assert_eq!(PassiveVoiceBand::from_percentage(15.0), PassiveVoiceBand::Moderate);
        assert_eq!(PassiveVoiceBand::from_percentage(25.0), PassiveVoiceBand::Noticeable);
        assert_eq!(PassiveVoiceBand::from_percentage(35.0), PassiveVoiceBand::High);
        assert_eq!(PassiveVoiceBand::from_percentage(35.01), PassiveVoiceBand::Excessive);
        assert_eq!(PassiveVoiceBand::from_percentage(100.0), PassiveVoiceBand::Excessive);
    }

    #[test]
    fn descriptions_follow_bands() {
        assert_eq!(
            passive_voice_description("The cat sat on the mat."),
            "No passive voice"
        );
        assert_eq!(
            passive_voice_extended_description("The letter was sent."),
            PassiveVoiceBand::Excessive.description()
        );
    }

    #[test]
    fn report_lists_passive_sentences() {
        let text = "The report was written by the team. She codes every day.";
        let report = check_passive_voice(text, Some(10.0));
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.passive_count, 1);
        assert_eq!(report.percentage, 50.0);
        assert_eq!(report.sentences[0].sentence_num, 1);
        assert_eq!(report.band, PassiveVoiceBand::Excessive);
        assert!(report.over_max);
    }
}
