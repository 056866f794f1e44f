//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::LexdensApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Lexical density service
  ///
  /// - Production: `Arc::new(LexdensApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubLexdensApiService)`
  pub service: Arc<dyn LexdensApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn LexdensApiService>) -> Self {
    Self { config, service }
  }
}
