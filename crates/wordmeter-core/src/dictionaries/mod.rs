//! Dictionaries for text analysis.
//!
//! Fixed word sets used by sentence segmentation, frequency filtering,
//! passive voice detection, and syllable counting. Every table is built once
//! on first use and never mutated.

pub mod abbreviations;
pub mod participles;
pub mod stop_words;
pub mod syllables;
