//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use lexdens::config::{LexdensConfig, LogLevel};

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_CONFIG_FILE, ENV_LOG_LEVEL, ENV_STORE_PATH,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// Library configuration (store, vocabulary, limits, logging)
  pub lexdens: LexdensConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_vars(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// - `LEXDENS_API_BASE_URL`: bind address
  /// - `LEXDENS_CONFIG`: JSON file with a `LexdensConfig`
  /// - `LEXDENS_STORE_PATH`: overrides `store.path`
  /// - `LEXDENS_LOG_LEVEL`: overrides `logging.level`
  ///
  /// # Errors
  /// Returns an error if the config file cannot be loaded or the log level is unknown
  pub fn from_vars<F>(get: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let mut lexdens = match get(ENV_CONFIG_FILE) {
      Some(path) => {
        LexdensConfig::from_json_file(&path).map_err(|e| ApiError::config(e.to_string()))?
      }
      None => LexdensConfig::default(),
    };

    if let Some(path) = get(ENV_STORE_PATH) {
      lexdens.store.path = Some(PathBuf::from(path));
    }

    if let Some(level) = get(ENV_LOG_LEVEL) {
      lexdens.logging.level = LogLevel::from_str(&level).map_err(ApiError::config)?;
    }

    Ok(Self { bind_addr, lexdens })
  }
}
