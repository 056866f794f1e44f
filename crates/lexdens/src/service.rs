// crates/lexdens/src/service.rs

//! LexdensService: facade of the lexdens crate.
//!
//! - Word store (JsonFileWordStore) + one-time seeding
//! - Input validation (InputValidator)
//! - Density calculation (LexicalDensityCalculator)
//!
//! Callers such as the HTTP layer only need this struct.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::{InputValidator, LexicalDensityCalculator};
use crate::config::{LexdensConfig, LimitsConfig};
use crate::errors::LexdensResult;
use crate::models::{AnalysisMode, AnalysisRequest, AnalysisResult};
use crate::vocabulary::{JsonFileWordStore, NonLexicalWordSet};

/// Facade of the lexdens crate.
///
/// Construction seeds the word store, so a built service is ready to serve
/// requests. Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct LexdensService {
  validator: InputValidator,
  calculator: LexicalDensityCalculator,
}

impl LexdensService {
  /// Initialization (config validation + store open + seeding)
  ///
  /// # Processing Flow
  /// 1. Validate the configuration
  /// 2. Open the JSON word store (configured path or OS data directory)
  /// 3. Seed the configured vocabulary if the store is empty
  ///
  /// # Errors
  /// - Invalid configuration
  /// - The store cannot be opened or written; the service must not run
  ///   with an empty vocabulary
  pub fn init(config: &LexdensConfig) -> LexdensResult<Self> {
    config.validate()?;

    let store = match config.store_path() {
      Some(path) => JsonFileWordStore::open(path)?,
      None => JsonFileWordStore::open_default()?,
    };
    info!(path = %store.path().display(), "Word store opened");

    let word_set = NonLexicalWordSet::new(Arc::new(store));
    word_set.seed_if_empty(config.vocabulary())?;

    Ok(Self::with_word_set(word_set, config.limits()))
  }

  /// Builds a service over an existing word set
  ///
  /// No seeding happens here.
  pub fn with_word_set(word_set: NonLexicalWordSet, limits: &LimitsConfig) -> Self {
    Self {
      validator: InputValidator::new(limits),
      calculator: LexicalDensityCalculator::new(word_set),
    }
  }

  /// Returns the word set in use
  pub fn word_set(&self) -> &NonLexicalWordSet {
    self.calculator.word_set()
  }

  /// Validates, then computes the lexical density of `text`.
  ///
  /// Validation failures return before any word lookup.
  ///
  /// # Errors
  /// - `LexdensError::Validation` if the input is rejected
  pub fn analyze(&self, text: &str, mode: Option<&str>) -> LexdensResult<AnalysisResult> {
    self.validator.validate(text, mode)?;

    let mode = AnalysisMode::from_param(mode);
    debug!(?mode, text_len = text.len(), "Analyzing text");

    Ok(self.calculator.compute(text, mode))
  }

  /// Same as [`analyze`](Self::analyze) for a request value
  ///
  /// # Errors
  /// - `LexdensError::Validation` if the input is rejected
  pub fn analyze_request(&self, request: &AnalysisRequest) -> LexdensResult<AnalysisResult> {
    self.analyze(&request.text, request.mode.as_deref())
  }
}
