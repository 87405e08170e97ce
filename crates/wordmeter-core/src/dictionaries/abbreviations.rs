//! Abbreviation dictionary for sentence boundary detection.
//!
//! A period directly after one of these tokens does not end a sentence.
//! Entries are lowercase and carry no trailing period.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens after which a trailing period is not a sentence terminator.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "hon", "gen", "col", "capt",
        "lt", "sgt", "gov", "sen", "rep", "pres",
    ]);

    // Months, weekdays and units. Some double as ordinary words ("sat",
    // "sun", "wed", "mar", "min", "sec"), so a sentence that ends on one of
    // them runs on into the next.
    set.extend([
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]);

    // Weekdays
    set.extend(["mon", "tue", "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun"]);

    // Units
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "ft", "yd", "mi", "sq", "mph",
        "hr", "hrs", "min", "sec",
    ]);

    // Legal, academic and general
    set.extend([
        "etc", "vs", "eg", "ie", "al", "cf", "viz", "ibid", "approx", "dept", "est", "fig",
        "inc", "corp", "ltd", "co", "vol", "ch", "pp", "ed", "phd", "esq", "ave", "blvd",
        "rd", "mt",
    ]);

    set
});

/// Check if a word is a known abbreviation.
///
/// Matching is case-insensitive and ignores surrounding periods, so `"Dr"`,
/// `"dr."` and `"DR"` all match.
pub fn is_abbreviation(word: &str) -> bool {
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(lower.trim_matches('.'))
}
