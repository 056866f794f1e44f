//! Default non-lexical vocabulary
//!
//! To add or remove words, supply `vocabulary.words` in the configuration,
//! remove the store file and restart the service.

/// Function words seeded into an empty store, in insertion order.
///
/// Casing is kept as listed. "that" appears twice; membership is a set,
/// so the second insert changes nothing observable.
pub const DEFAULT_NON_LEXICAL_WORDS: [&str; 36] = [
  "to", "got", "is", "have", "and", "although", "or", "that", "when", "while", "a", "either",
  "more", "much", "neither", "my", "that", "the", "as", "no", "nor", "not", "at", "between", "in",
  "of", "without", "I", "you", "he", "she", "it", "we", "they", "anybody", "one",
];

/// Returns the default vocabulary as owned strings
pub fn default_non_lexical_words() -> Vec<String> {
  DEFAULT_NON_LEXICAL_WORDS.iter().map(|w| (*w).to_string()).collect()
}
