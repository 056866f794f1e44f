//! Lexical density calculation
//!
//! `LD = lexical words / total words`, where a word is lexical when it is not
//! in the non-lexical vocabulary.

use std::collections::HashSet;

use tracing::debug;

use super::normalizer::{normalize, sentences, tokenize, word_count};
use crate::models::{AnalysisMode, AnalysisResult, Density};
use crate::vocabulary::NonLexicalWordSet;

/// Computes overall and per-sentence lexical density
///
/// Stateless apart from the shared word set; every call starts a fresh
/// classification pass.
#[derive(Debug, Clone)]
pub struct LexicalDensityCalculator {
  word_set: NonLexicalWordSet,
}

impl LexicalDensityCalculator {
  /// Constructor for LexicalDensityCalculator
  pub fn new(word_set: NonLexicalWordSet) -> Self {
    Self { word_set }
  }

  /// Returns the word set used for classification
  pub fn word_set(&self) -> &NonLexicalWordSet {
    &self.word_set
  }

  /// Computes the density of `text` in the given mode
  ///
  /// Input is expected to have passed [`InputValidator`](super::InputValidator);
  /// zero-word figures still come out as `0.00` rather than failing.
  pub fn compute(&self, text: &str, mode: AnalysisMode) -> AnalysisResult {
    match mode {
      AnalysisMode::Overall => self.overall(text),
      AnalysisMode::Verbose => self.verbose(text),
    }
  }

  /// Overall density only
  ///
  /// Periods are stripped before counting.
  pub fn overall(&self, text: &str) -> AnalysisResult {
    let mut classifier = Classifier::new(&self.word_set);

    let normalized = normalize(text, true);
    let overall_ld = classifier.density(&normalized);

    debug!(
      lexical = overall_ld.lexical,
      total = overall_ld.total,
      lookups = classifier.lookups,
      "Overall lexical density computed"
    );

    AnalysisResult {
      sentence_ld: None,
      overall_ld,
    }
  }

  /// Per-sentence densities plus the overall density
  ///
  /// Sentences are the non-empty `.`-delimited segments of the text with
  /// periods kept. The overall numerator is the sum of lexical words over
  /// those sentences; its denominator is counted separately on the text with
  /// periods stripped.
  pub fn verbose(&self, text: &str) -> AnalysisResult {
    let mut classifier = Classifier::new(&self.word_set);

    let with_periods = normalize(text, false);
    let mut sentence_ld = Vec::new();
    let mut total_lexical = 0;

    for sentence in sentences(&with_periods) {
      let density = classifier.density(sentence);
      total_lexical += density.lexical;
      sentence_ld.push(density);
    }

    let total_words = word_count(&normalize(text, true));
    let overall_ld = Density::new(total_lexical, total_words);

    debug!(
      sentences = sentence_ld.len(),
      lexical = total_lexical,
      total = total_words,
      lookups = classifier.lookups,
      "Verbose lexical density computed"
    );

    AnalysisResult {
      sentence_ld: Some(sentence_ld),
      overall_ld,
    }
  }
}

/// One classification pass over a request
///
/// Remembers tokens already found lexical (exact casing) so repeats skip the
/// store. Non-lexical tokens are not remembered and are looked up every time.
struct Classifier<'a> {
  word_set: &'a NonLexicalWordSet,
  lexical_seen: HashSet<String>,
  lookups: usize,
}

impl<'a> Classifier<'a> {
  fn new(word_set: &'a NonLexicalWordSet) -> Self {
    Self {
      word_set,
      lexical_seen: HashSet::new(),
      lookups: 0,
    }
  }

  fn is_lexical(&mut self, token: &str) -> bool {
    if self.lexical_seen.contains(token) {
      return true;
    }

    self.lookups += 1;
    if self.word_set.contains(token) {
      return false;
    }

    self.lexical_seen.insert(token.to_string());
    true
  }

  /// Counts lexical words among the tokens of `text`
  fn density(&mut self, text: &str) -> Density {
    let mut density = Density::default();
    for token in tokenize(text) {
      density.total += 1;
      if self.is_lexical(token) {
        density.lexical += 1;
      }
    }
    density
  }
}
