//! Character classification and counting.
//!
//! Each counter is available as a standalone function. [`CharacterCounts`]
//! computes all of them in a single pass and always agrees with the
//! individual functions.
//!
//! Characters are Unicode scalar values, so `"é"` counts once whether or not
//! it is ASCII.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Punctuation characters counted by [`punctuation_count`].
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '[', ']', '{', '}', '-',
];

/// Every character counter for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CharacterCounts {
    /// All characters.
    pub total: usize,
    /// Characters that are not whitespace.
    pub no_whitespace: usize,
    /// Alphabetic characters in any script.
    pub letters: usize,
    /// Uppercase characters.
    pub uppercase: usize,
    /// Lowercase characters.
    pub lowercase: usize,
    /// ASCII digits.
    pub digits: usize,
    /// Whitespace characters of any kind.
    pub whitespace: usize,
    /// Space characters (U+0020).
    pub spaces: usize,
    /// Tab characters.
    pub tabs: usize,
    /// Line feed characters.
    pub newlines: usize,
    /// Characters in [`PUNCTUATION`].
    pub punctuation: usize,
    /// Characters that are not letters, digits, whitespace, or punctuation.
    pub special: usize,
    /// Emoji and pictographs.
    pub emoji: usize,
    /// Characters with a code point at or below U+007F.
    pub ascii: usize,
    /// Characters above U+007F.
    pub non_ascii: usize,
    /// Vowels (`y` included by position).
    pub vowels: usize,
    /// Consonants (`y` included by position).
    pub consonants: usize,
}

impl CharacterCounts {
    /// Compute every counter in one pass over `text`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut counts = Self::default();

        for (i, &c) in chars.iter().enumerate() {
            counts.total += 1;
            if c.is_whitespace() {
                counts.whitespace += 1;
                match c {
                    ' ' => counts.spaces += 1,
                    '\t' => counts.tabs += 1,
                    '\n' => counts.newlines += 1,
                    _ => {}
                }
            } else {
                counts.no_whitespace += 1;
            }
            if c.is_alphabetic() {
                counts.letters += 1;
            }
            if c.is_uppercase() {
                counts.uppercase += 1;
            }
            if c.is_lowercase() {
                counts.lowercase += 1;
            }
            if c.is_ascii_digit() {
                counts.digits += 1;
            }
            if is_punctuation(c) {
                counts.punctuation += 1;
            }
            if is_special(c) {
                counts.special += 1;
            }
            if is_emoji(c) {
                counts.emoji += 1;
            }
            if c.is_ascii() {
                counts.ascii += 1;
            } else {
                counts.non_ascii += 1;
            }
            if counts_as_vowel(&chars, i) {
                counts.vowels += 1;
            }
            if counts_as_consonant(&chars, i) {
                counts.consonants += 1;
            }
        }

        counts
    }
}

/// Total number of characters.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of characters that are not whitespace.
pub fn char_count_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Number of alphabetic characters.
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Number of uppercase characters.
pub fn uppercase_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_uppercase()).count()
}

/// Number of lowercase characters.
pub fn lowercase_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_lowercase()).count()
}

/// Number of ASCII digits.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Number of whitespace characters.
pub fn whitespace_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_whitespace()).count()
}

/// Number of space characters.
pub fn space_count(text: &str) -> usize {
    text.chars().filter(|&c| c == ' ').count()
}

/// Number of tab characters.
pub fn tab_count(text: &str) -> usize {
    text.chars().filter(|&c| c == '\t').count()
}

/// Number of line feeds.
pub fn newline_count(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count()
}

/// Number of characters from [`PUNCTUATION`].
pub fn punctuation_count(text: &str) -> usize {
    text.chars().filter(|&c| is_punctuation(c)).count()
}

/// Number of characters that are not letters, digits, whitespace, or punctuation.
pub fn special_count(text: &str) -> usize {
    text.chars().filter(|&c| is_special(c)).count()
}

/// Number of emoji and pictographs.
pub fn emoji_count(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}

/// Number of ASCII characters.
pub fn ascii_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii).count()
}

/// Number of non-ASCII characters.
pub fn non_ascii_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_ascii()).count()
}

/// Number of vowels.
///
/// `a e i o u` always count. `y` counts when it neither starts a word nor
/// precedes another vowel (`"gym"`, `"day"`).
pub fn vowel_count(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .filter(|&i| counts_as_vowel(&chars, i))
        .count()
}

/// Number of consonants.
///
/// ASCII letters other than vowels count directly. `y` counts when it starts
/// a word or follows a vowel. A `y` after a vowel at the end of a word
/// (`"day"`) therefore counts as both vowel and consonant.
pub fn consonant_count(text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .filter(|&i| counts_as_consonant(&chars, i))
        .count()
}

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

fn is_special(c: char) -> bool {
    !c.is_alphabetic() && !c.is_ascii_digit() && !c.is_whitespace() && !is_punctuation(c)
}

/// Emoji ranges plus a fallback for other non-word, non-punctuation symbols.
fn is_emoji(c: char) -> bool {
    let cp = u32::from(c);
    if (0x1F300..=0x1FAFF).contains(&cp) || (0x2600..=0x27BF).contains(&cp) {
        return true;
    }
    !c.is_ascii()
        && !c.is_alphanumeric()
        && !c.is_whitespace()
        // combining diacritics
        && !(0x0300..=0x036F).contains(&cp)
        // general punctuation: dashes, curly quotes, zero-width joiner
        && !(0x2000..=0x206F).contains(&cp)
        // variation selectors
        && !(0xFE00..=0xFE0F).contains(&cp)
}

const fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

const fn is_y(c: char) -> bool {
    matches!(c, 'y' | 'Y')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn at_word_start(chars: &[char], i: usize) -> bool {
    i == 0 || !is_word_char(chars[i - 1])
}

fn counts_as_vowel(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if is_plain_vowel(c) {
        return true;
    }
    is_y(c)
        && !at_word_start(chars, i)
        && !chars.get(i + 1).copied().is_some_and(is_plain_vowel)
}

fn counts_as_consonant(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    if is_y(c) {
        return at_word_start(chars, i) || (i > 0 && is_plain_vowel(chars[i - 1]));
    }
    c.is_ascii_alphabetic() && !is_plain_vowel(c)
}
