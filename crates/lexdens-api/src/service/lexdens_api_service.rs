//! Lexical density service

use std::time::Instant;

use lexdens::LexdensService;
use lexdens::models::AnalysisRequest;
use tracing::debug;

use crate::config::Config;
use crate::errors::Result;
use crate::models::ComplexityResponse;

/// Common interface for the lexical density service
///
/// This trait allows swapping the production implementation (`LexdensApiServiceFull`)
/// with test stubs.
pub trait LexdensApiService: Send + Sync {
  /// Validates the request and computes its lexical density
  ///
  /// # Errors
  /// - Input error (invalid mode, too many words or characters, no words)
  /// - Internal error
  fn analyze(&self, request: AnalysisRequest) -> Result<ComplexityResponse>;
}

/// Lexical density service backed by the JSON word store
#[derive(Debug, Clone)]
pub struct LexdensApiServiceFull {
  inner: LexdensService,
}

impl LexdensApiServiceFull {
  /// Initializes the service
  ///
  /// Opens the word store and seeds it when empty, so this must run before
  /// the server accepts requests.
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or the store cannot be used
  pub fn new(config: &Config) -> Result<Self> {
    let inner = LexdensService::init(&config.lexdens)?;
    Ok(Self { inner })
  }

  /// Wraps an already built library service
  #[must_use]
  pub fn from_service(inner: LexdensService) -> Self {
    Self { inner }
  }

  /// Computes the lexical density of the request text
  ///
  /// # Errors
  /// Returns an input error if validation rejects the request
  pub fn analyze(&self, request: AnalysisRequest) -> Result<ComplexityResponse> {
    let start = Instant::now();
    let result = self.inner.analyze_request(&request)?;

    debug!(
      elapsed_us = start.elapsed().as_micros() as u64,
      overall_ld = %result.overall_ld,
      "Lexical density computed"
    );

    Ok(result.into())
  }
}

/// Production implementation of trait `LexdensApiService`
impl LexdensApiService for LexdensApiServiceFull {
  fn analyze(&self, request: AnalysisRequest) -> Result<ComplexityResponse> {
    // Writing `self.analyze(...)` here would recurse into the trait method
    LexdensApiServiceFull::analyze(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use lexdens::config::StoreConfig;
  use lexdens::LexdensConfig;
  use tempfile::TempDir;

  fn create_test_config(temp_dir: &TempDir) -> Config {
    Config {
      bind_addr: "127.0.0.1:5531".to_string(),
      lexdens: LexdensConfig {
        store: StoreConfig {
          path: Some(temp_dir.path().join("words.json")),
        },
        ..LexdensConfig::default()
      },
    }
  }

  #[test]
  fn service_creation_seeds_store() {
    let temp_dir = TempDir::new().unwrap();
    let service = LexdensApiServiceFull::new(&create_test_config(&temp_dir)).unwrap();

    let response = service
      .analyze(AnalysisRequest::new(
        "The quick brown fox jumps over the lazy dog.",
        None,
      ))
      .unwrap();
    assert_eq!(response.data.overall(), "0.78");
    assert!(temp_dir.path().join("words.json").is_file());
  }

  #[test]
  fn invalid_mode_error() {
    let temp_dir = TempDir::new().unwrap();
    let service = LexdensApiServiceFull::new(&create_test_config(&temp_dir)).unwrap();

    let err = service
      .analyze(AnalysisRequest::new("fox", Some("INVALID".to_string())))
      .unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[test]
  fn text_too_long_error() {
    let temp_dir = TempDir::new().unwrap();
    let service = LexdensApiServiceFull::new(&create_test_config(&temp_dir)).unwrap();

    let long_text = "word ".repeat(101);
    let err = service.analyze(AnalysisRequest::new(long_text, None)).unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn malformed_store_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("words.json"), "{ not json").unwrap();

    let err = LexdensApiServiceFull::new(&create_test_config(&temp_dir)).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }
}
