//! Readability scoring.
//!
//! Flesch Reading Ease: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Flesch-Kincaid Grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Words and sentences come from [`text`], so the scores agree with the
//! reported counts. Syllables are estimated per word by
//! [`dictionaries::syllables`](crate::dictionaries::syllables).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllables;
use crate::text;

/// Grades at or above this are labelled "College or Higher".
const COLLEGE_GRADE: f64 = 13.0;

/// Readability scores for a text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease (higher is easier, roughly 0-100).
    pub reading_ease: f64,
    /// Label for the reading ease band.
    pub ease_description: String,
    /// Flesch-Kincaid Grade Level.
    pub grade: f64,
    /// Label for the grade ("8th Grade", "College or Higher", ...).
    pub grade_label: String,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of words.
    pub words: usize,
    /// Estimated syllable count.
    pub syllables: usize,
}

/// Score `text`, or `None` when it has no words or no sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score(text: &str) -> Option<ReadabilityReport> {
    let tokens = text::tokenize(text);
    let words = tokens.len();
    let sentences = text::sentence_count(text);
    if words == 0 || sentences == 0 {
        tracing::debug!(words, sentences, "nothing to score");
        return None;
    }

    let syllables: usize = tokens.iter().map(|w| syllables::count_syllables(w)).sum();
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;

    let reading_ease = 1.015f64.mul_add(-words_per_sentence, 206.835) - 84.6 * syllables_per_word;
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    Some(ReadabilityReport {
        reading_ease,
        ease_description: ease_description(reading_ease).to_string(),
        grade,
        grade_label: grade_label(grade),
        sentences,
        words,
        syllables,
    })
}

/// Label a Flesch-Kincaid grade.
///
/// The grade is floored, then clamped: anything below 2 reads as
/// "1st Grade or Lower" and 13 or above as "College or Higher".
pub fn grade_label(grade: f64) -> String {
    if grade.is_nan() || grade < 2.0 {
        return "1st Grade or Lower".to_string();
    }
    if grade >= COLLEGE_GRADE {
        return "College or Higher".to_string();
    }
    let whole = grade.floor() as u32;
    format!("{whole}{} Grade", ordinal_suffix(whole))
}

const fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Describe a Flesch Reading Ease score.
pub fn ease_description(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "Very Easy",
        s if s >= 80.0 => "Easy",
        s if s >= 70.0 => "Fairly Easy",
        s if s >= 60.0 => "Standard",
        s if s >= 50.0 => "Fairly Difficult",
        s if s >= 30.0 => "Difficult",
        _ => "Very Confusing",
    }
}
