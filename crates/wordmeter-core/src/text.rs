//! Text processing utilities.
//!
//! Provides word tokenization, sentence segmentation, and paragraph
//! splitting. Every other metric is built on these three functions, so the
//! counts they report stay consistent with each other.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations::is_abbreviation;

/// A word: a word character followed by word characters, apostrophes,
/// hyphens, or periods, ending on a word boundary.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w[\w'\-.]*\b").expect("valid regex"));

/// Runs of terminal punctuation, including the Unicode ellipsis.
static TERMINAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?…]+").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Text made only of punctuation and whitespace. Symbols such as `$` and
/// emoji are content, so `"$."` survives as a sentence.
static PUNCTUATION_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\s]*$").expect("valid regex"));

/// A paragraph break: a newline plus any whitespace after it.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*").expect("valid regex"));

/// Split text into words, preserving case.
///
/// Contractions (`don't`), hyphenated words (`well-known`), and dotted
/// abbreviations (`U.S`) stay single tokens. A trailing period is never part
/// of a token.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into lowercase words.
pub fn tokenize_lowercase(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Number of words, always equal to `tokenize(text).len()`.
pub fn word_count(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartKind {
    Text,
    Terminal,
}

#[derive(Debug)]
struct Part {
    kind: PartKind,
    span: Range<usize>,
}

/// Split text into sentences with abbreviation awareness.
///
/// Whitespace is collapsed first, so every returned sentence uses single
/// spaces. A period after a known abbreviation, an initial, a short
/// all-caps acronym, or a bare number does not end a sentence. Sentences
/// made only of punctuation are dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Vec<String> {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    let normalized: &str = &collapsed;
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;

    for part in split_parts(normalized) {
        let sentence_start = *start.get_or_insert(part.span.start);
        end = part.span.end;

        if part.kind == PartKind::Terminal {
            let buffer = &normalized[sentence_start..end];
            let run = &normalized[part.span];
            if should_end_sentence(buffer, run) {
                push_sentence(&mut sentences, buffer);
                start = None;
            }
        }
    }

    if let Some(sentence_start) = start {
        push_sentence(&mut sentences, &normalized[sentence_start..end]);
    }

    sentences
}

/// Number of sentences, always equal to `segment(text).len()`.
pub fn sentence_count(text: &str) -> usize {
    segment(text).len()
}

/// Split text into paragraphs at line breaks, dropping blank ones.
pub fn paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of paragraphs, always equal to `paragraphs(text).len()`.
pub fn paragraph_count(text: &str) -> usize {
    paragraphs(text).len()
}

/// Alternate text and terminal-punctuation parts, skipping blank text.
fn split_parts(text: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut cursor = 0;

    for m in TERMINAL_RUN.find_iter(text) {
        push_text_part(&mut parts, text, cursor..m.start());
        parts.push(Part {
            kind: PartKind::Terminal,
            span: m.range(),
        });
        cursor = m.end();
    }
    push_text_part(&mut parts, text, cursor..text.len());

    parts
}

fn push_text_part(parts: &mut Vec<Part>, text: &str, span: Range<usize>) {
    let slice = &text[span.clone()];
    let trimmed_start = slice.trim_start();
    if trimmed_start.is_empty() {
        return;
    }
    let start = span.start + (slice.len() - trimmed_start.len());
    let end = start + trimmed_start.trim_end().len();
    parts.push(Part {
        kind: PartKind::Text,
        span: start..end,
    });
}

/// Decide whether the sentence in `buffer`, which ends with `run`, is complete.
fn should_end_sentence(buffer: &str, run: &str) -> bool {
    if buffer.ends_with("...") || buffer.ends_with('…') {
        return true;
    }
    if run.contains(['!', '?']) {
        return true;
    }

    let before = &buffer[..buffer.len() - run.len()];
    let Some(last_word) = before.split_whitespace().next_back() else {
        return true;
    };
    let original: String = last_word.chars().filter(|c| c.is_alphanumeric()).collect();
    if original.is_empty() {
        return true;
    }

    if is_abbreviation(&original.to_lowercase()) {
        return false;
    }

    let len = original.chars().count();
    // Initials ("J.")
    if len == 1 && original.chars().all(char::is_alphabetic) {
        return false;
    }
    // Acronyms ("NASA.")
    if len <= 4 && original.chars().all(char::is_uppercase) {
        return false;
    }
    // List numbering ("1.")
    if original.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    true
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if !sentence.is_empty() && !PUNCTUATION_ONLY.is_match(sentence) {
        sentences.push(sentence.to_string());
    }
}
