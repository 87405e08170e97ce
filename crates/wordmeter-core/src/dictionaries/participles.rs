//! Word tables for passive voice detection.
//!
//! Passive constructions are approximated as an auxiliary (one to three
//! words) followed by a past participle, with optional adverbs between.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Single-word auxiliaries that can introduce a passive construction.
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "am", "is", "are", "was", "were", "be", "been", "being", "get", "gets", "got",
        "gotten", "getting", "isn't", "aren't", "wasn't", "weren't",
    ]
    .into_iter()
    .collect()
});

/// Multi-word auxiliary phrases (two or three words).
pub static AUXILIARY_PHRASES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Two words
        "has been",
        "have been",
        "had been",
        "will be",
        "would be",
        "could be",
        "should be",
        "might be",
        "may be",
        "must be",
        "can be",
        "shall be",
        "is being",
        "are being",
        "was being",
        "were being",
        "to be",
        "not be",
        // Three words
        "will have been",
        "would have been",
        "could have been",
        "should have been",
        "might have been",
        "may have been",
        "must have been",
        "shall have been",
        "is going to",
        "are going to",
        "was going to",
        "were going to",
        "has not been",
        "have not been",
        "had not been",
    ]
    .into_iter()
    .collect()
});

/// Adverbs that may sit between an auxiliary and its participle
/// ("was quickly written").
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "never", "also", "always", "already", "just", "still", "often", "quickly",
        "slowly", "recently", "finally", "carefully", "completely", "entirely", "fully",
        "largely", "mostly", "partly", "widely", "highly", "easily", "usually", "really",
        "very", "soon", "then", "once", "newly", "badly", "well", "being",
    ]
    .into_iter()
    .collect()
});

/// Irregular past participles.
pub static IRREGULAR_PARTICIPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "arisen", "awoken", "beaten", "become", "begun", "bent", "bet", "bitten", "bled",
        "blown", "bought", "bound", "bred", "broken", "brought", "built", "burnt", "burst",
        "cast", "caught", "chosen", "clung", "come", "cost", "crept", "cut", "dealt", "dug",
        "done", "drawn", "dreamt", "driven", "drunk", "eaten", "fallen", "fed", "felt",
        "fought", "found", "fled", "flung", "flown", "forbidden", "forgotten", "forgiven",
        "frozen", "given", "gone", "ground", "grown", "hung", "heard", "hidden", "hit", "held",
        "hurt", "kept", "knelt", "known", "laid", "led", "learnt", "left", "lent", "let",
        "lain", "lit", "lost", "made", "meant", "met", "mistaken", "paid", "proven", "put",
        "quit", "read", "ridden", "rung", "risen", "run", "said", "seen", "sought", "sold",
        "sent", "set", "sewn", "shaken", "shed", "shone", "shot", "shown", "shrunk", "shut",
        "sung", "sunk", "sat", "slain", "slept", "slid", "slung", "spoken", "sped", "spent",
        "spilt", "spun", "spread", "sprung", "stood", "stolen", "stuck", "stung", "stricken",
        "struck", "strung", "sworn", "swept", "swollen", "swum", "swung", "taken", "taught",
        "torn", "told", "thought", "thrown", "thrust", "understood", "undertaken", "upset",
        "woken", "worn", "woven", "wed", "wept", "won", "wound", "written", "withdrawn",
        "withheld", "overcome", "overtaken", "overthrown", "undone", "rewritten", "forsaken",
        "born", "borne",
    ]);

    set
});

/// Regular participle suffixes other than `-ed`.
const OTHER_SUFFIXES: &[&str] = &["en", "ne", "wn", "nt"];

/// Check if a lowercase token looks like a past participle.
///
/// Irregular forms come from [`IRREGULAR_PARTICIPLES`]. Regular forms end in
/// `-ed` (at least four characters total) or in `-en`, `-ne`, `-wn`, `-nt`
/// with a stem of at least three characters.
pub fn is_past_participle(word: &str) -> bool {
    if IRREGULAR_PARTICIPLES.contains(word) {
        return true;
    }

    let len = word.chars().count();
    if word.ends_with("ed") {
        return len >= 4;
    }

    OTHER_SUFFIXES
        .iter()
        .any(|suffix| word.ends_with(suffix) && len >= 3 + suffix.len())
}
