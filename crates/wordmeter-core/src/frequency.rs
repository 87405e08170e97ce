//! Word frequency tables.
//!
//! A table lists each distinct lowercase word with its count, most frequent
//! first. Words with equal counts keep the order in which they first appear
//! in the text.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::stop_words::is_stop_word;
use crate::text;

/// A word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The lowercase word.
    pub word: String,
    /// Number of occurrences (at least 1).
    pub count: usize,
}

impl FrequencyEntry {
    /// Create an entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Build a frequency table for `text`.
///
/// Counts sum to the word count of `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn frequency(text: &str) -> Vec<FrequencyEntry> {
    let mut table: Vec<FrequencyEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in text::tokenize_lowercase(text) {
        if let Some(&slot) = index.get(&word) {
            table[slot].count += 1;
        } else {
            index.insert(word.clone(), table.len());
            table.push(FrequencyEntry::new(word, 1));
        }
    }

    // `sort_by` is stable, so ties keep first-occurrence order.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    tracing::debug!(unique = table.len(), "built frequency table");
    table
}

/// Remove stop words from a table, keeping the order and counts of the rest.
pub fn filter_stop_words(table: &[FrequencyEntry]) -> Vec<FrequencyEntry> {
    table
        .iter()
        .filter(|entry| !is_stop_word(&entry.word))
        .cloned()
        .collect()
}

/// Number of distinct words in a table.
pub const fn unique_word_count(table: &[FrequencyEntry]) -> usize {
    table.len()
}

/// The most frequent entry of a sorted table.
pub fn most_common(table: &[FrequencyEntry]) -> Option<&FrequencyEntry> {
    table.first()
}

/// Sum of all counts in a table.
pub fn total_count(table: &[FrequencyEntry]) -> usize {
    table.iter().map(|entry| entry.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &[FrequencyEntry]) -> Vec<(&str, usize)> {
        table.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let table = frequency("b a b a c");
        assert_eq!(pairs(&table), vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn counts_are_case_folded() {
        let table = frequency("The cat and THE dog. the end");
        assert_eq!(table[0], FrequencyEntry::new("the", 3));
    }

    #[test]
    fn sorted_descending() {
        let table = frequency("x y y z z z");
        assert_eq!(pairs(&table), vec![("z", 3), ("y", 2), ("x", 1)]);
        assert!(table.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn counts_sum_to_word_count() {
        for text in ["", "one two two", "Don't stop. Don't!", "a-b a-b c"] {
            assert_eq!(total_count(&frequency(text)), text::word_count(text));
        }
    }

    #[test]
    fn empty_input() {
        assert!(frequency("").is_empty());
        assert!(frequency("  ...  ").is_empty());
    }

    #[test]
    fn filter_removes_stop_words() {
        let table = frequency("the rocket and the moon and the rocket");
        let filtered = filter_stop_words(&table);
        assert_eq!(pairs(&filtered), vec![("rocket", 2), ("moon", 1)]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let table = vec![FrequencyEntry::new("The", 2), FrequencyEntry::new("Moon", 1)];
        assert_eq!(pairs(&filter_stop_words(&table)), vec![("Moon", 1)]);
    }

    #[test]
    fn helpers_read_the_cached_table() {
        let table = frequency("sun sun moon");
        assert_eq!(unique_word_count(&table), 2);
        assert_eq!(most_common(&table).map(|e| e.word.as_str()), Some("sun"));
        assert!(most_common(&[]).is_none());
    }
}
