//! Punctuation normalization and word splitting
//!
//! Only a fixed punctuation class is replaced. Everything else, quotes and
//! question marks included, stays attached to the neighbouring word.

/// Characters replaced by a space in every mode
const PUNCTUATION: &[char] = &[
  ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~', '(',
  ')',
];

/// Sentence terminator, replaced only when periods are stripped
pub const PERIOD: char = '.';

/// Word separator produced by normalization
const SEPARATOR: char = ' ';

/// Returns true if `c` belongs to the replaced punctuation class
fn is_punctuation(c: char, strip_periods: bool) -> bool {
  PUNCTUATION.contains(&c) || (strip_periods && c == PERIOD)
}

/// Replaces each punctuation character with a single space
///
/// `.` is replaced too when `strip_periods` is true. The output has the
/// same number of characters as the input.
pub fn normalize(text: &str, strip_periods: bool) -> String {
  text.chars().map(|c| if is_punctuation(c, strip_periods) { SEPARATOR } else { c }).collect()
}

/// Splits on the space character and drops empty pieces
///
/// Tabs and newlines are not separators.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
  text.split(SEPARATOR).filter(|token| !token.is_empty())
}

/// Number of words [`tokenize`] yields
pub fn word_count(text: &str) -> usize {
  tokenize(text).count()
}

/// Splits normalized text on `.` and drops empty segments
///
/// Whitespace-only segments are kept.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
  text.split(PERIOD).filter(|segment| !segment.is_empty())
}
