//! Ranked word search over a frequency table.
//!
//! A query is matched against every word in tiers: exact, prefix, substring,
//! shell-style wildcard (`*` and `?`), then fuzzy similarity by edit
//! distance. The tier sets the base score and the word's count breaks ties
//! within a tier.

use regex::{Regex, RegexBuilder};

use crate::frequency::FrequencyEntry;

/// Default maximum number of results.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

const EXACT_SCORE: usize = 1000;
const PREFIX_SCORE: usize = 800;
const SUBSTRING_SCORE: usize = 600;
const WILDCARD_SCORE: usize = 400;
const FUZZY_SCALE: f64 = 200.0;
/// Similarity must exceed this for a fuzzy match.
const FUZZY_THRESHOLD: f64 = 0.6;

/// Rank the entries of `table` against `query` and return at most `limit`.
///
/// A blank query returns the first `limit` entries unchanged, so callers
/// should pass a table already sorted by [`frequency`](crate::frequency::frequency).
#[tracing::instrument(skip(table), fields(entries = table.len()))]
pub fn search(query: &str, table: &[FrequencyEntry], limit: usize) -> Vec<FrequencyEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return table.iter().take(limit).cloned().collect();
    }

    let wildcard = wildcard_regex(&query);
    let mut scored: Vec<(usize, &FrequencyEntry)> = table
        .iter()
        .filter_map(|entry| {
            score(&query, wildcard.as_ref(), &entry.word.to_lowercase())
                .map(|base| (base + entry.count, entry))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Base score of `word` for `query`, or `None` when it does not match.
fn score(query: &str, wildcard: Option<&Regex>, word: &str) -> Option<usize> {
    if word == query {
        return Some(EXACT_SCORE);
    }
    if word.starts_with(query) {
        return Some(PREFIX_SCORE);
    }
    if word.contains(query) {
        return Some(SUBSTRING_SCORE);
    }
    if wildcard.is_some_and(|re| re.is_match(word)) {
        return Some(WILDCARD_SCORE);
    }

    let similarity = similarity(query, word);
    (similarity > FUZZY_THRESHOLD).then(|| (similarity * FUZZY_SCALE).floor() as usize)
}

/// Compile a query into a case-insensitive regex, treating `*` and `?` as
/// wildcards and everything else literally.
fn wildcard_regex(query: &str) -> Option<Regex> {
    let mut pattern = String::with_capacity(query.len() * 2);
    for c in query.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(%err, query, "wildcard pattern rejected");
            None
        }
    }
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Edit distance with unit-cost insertion, deletion, and substitution.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, usize)]) -> Vec<FrequencyEntry> {
        entries
            .iter()
            .map(|&(word, count)| FrequencyEntry::new(word, count))
            .collect()
    }

    fn words(results: &[FrequencyEntry]) -> Vec<&str> {
        results.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn exact_beats_prefix_beats_fuzzy() {
        let t = table(&[("cat", 5), ("cats", 3), ("hat", 10)]);
        let results = search("cat", &t, DEFAULT_SEARCH_LIMIT);
        assert_eq!(words(&results), vec!["cat", "cats", "hat"]);
    }

    #[test]
    fn results_keep_counts() {
        let t = table(&[("cat", 5), ("cats", 3)]);
        let results = search("cat", &t, DEFAULT_SEARCH_LIMIT);
        assert_eq!(results[0], FrequencyEntry::new("cat", 5));
        assert_eq!(results[1], FrequencyEntry::new("cats", 3));
    }

    #[test]
    fn substring_beats_wildcard() {
        let t = table(&[("cart", 50), ("scatter", 1)]);
        // "c*t" is a wildcard match for both; neither is a substring match.
        assert_eq!(words(&search("c*t", &t, 10)), vec!["cart", "scatter"]);
        // "cat" is a substring of "scatter" only.
        assert_eq!(words(&search("cat", &t, 10))[0], "scatter");
    }

    #[test]
    fn question_mark_matches_one_char() {
        let t = table(&[("bat", 1), ("boat", 1)]);
        let results = search("b?t", &t, 10);
        assert_eq!(words(&results)[0], "bat");
    }

    #[test]
    fn metacharacters_are_literal() {
        let t = table(&[("a+b", 1), ("aab", 1)]);
        let results = search("a+b", &t, 10);
        assert_eq!(words(&results)[0], "a+b");
    }

    #[test]
    fn dissimilar_words_are_dropped() {
        let t = table(&[("elephant", 100), ("cat", 1)]);
        assert_eq!(words(&search("cat", &t, 10)), vec!["cat"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let t = table(&[("rust", 2)]);
        assert_eq!(words(&search("RUST", &t, 10)), vec!["rust"]);
    }

    #[test]
    fn blank_query_returns_head_of_table() {
        let t = table(&[("a", 3), ("b", 2), ("c", 1)]);
        assert_eq!(words(&search("", &t, 2)), vec!["a", "b"]);
        assert_eq!(words(&search("   ", &t, 10)), vec!["a", "b", "c"]);
    }

    #[test]
    fn limit_truncates() {
        let t = table(&[("cat", 1), ("cats", 1), ("catalog", 1)]);
        assert_eq!(search("cat", &t, 2).len(), 2);
        assert!(search("cat", &t, 0).is_empty());
    }

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("caf\u{e9}", "cafe"), 1);
    }

    #[test]
    fn similarity_threshold() {
        // 1 edit over 3 chars: 0.667 passes.
        assert!(similarity("cat", "hat") > FUZZY_THRESHOLD);
        // 2 edits over 4 chars: 0.5 fails.
        assert!(similarity("cats", "dogs") <= FUZZY_THRESHOLD);
    }
}
