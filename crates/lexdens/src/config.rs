// crates/lexdens/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::vocabulary::default_non_lexical_words;

/// Default maximum number of words per request
pub const DEFAULT_MAX_WORDS: usize = 100;

/// Default maximum number of characters per request, periods included
pub const DEFAULT_MAX_CHARACTERS: usize = 1000;

/// Top-level configuration for lexdens.
///
/// Every section is optional; a missing section takes its defaults.
///
/// ```json
/// {
///   "store": { "path": "/var/lib/lexdens/non_lexical_words.json" },
///   "vocabulary": { "words": ["the", "a", "of"] },
///   "limits": { "max_words": 100, "max_characters": 1000 },
///   "logging": { "level": "info" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexdensConfig {
  /// [store] section
  #[serde(default)]
  pub store: StoreConfig,
  /// [vocabulary] section
  #[serde(default)]
  pub vocabulary: VocabularyConfig,
  /// [limits] section
  #[serde(default)]
  pub limits: LimitsConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [store] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
  /// Word store file.
  ///
  /// `None` means the OS data directory, see `default_store_path`.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// [vocabulary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
  /// Words seeded into an empty store, in insertion order
  #[serde(default = "default_non_lexical_words")]
  pub words: Vec<String>,
}

impl Default for VocabularyConfig {
  fn default() -> Self {
    Self {
      words: default_non_lexical_words(),
    }
  }
}

/// [limits] section configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
  /// Maximum number of words
  #[serde(default = "default_max_words")]
  pub max_words: usize,
  /// Maximum number of characters after punctuation replacement
  #[serde(default = "default_max_characters")]
  pub max_characters: usize,
}

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      max_words: DEFAULT_MAX_WORDS,
      max_characters: DEFAULT_MAX_CHARACTERS,
    }
  }
}

fn default_max_words() -> usize {
  DEFAULT_MAX_WORDS
}

fn default_max_characters() -> usize {
  DEFAULT_MAX_CHARACTERS
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`
  pub fn as_filter_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl std::str::FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Loading =====

impl LexdensConfig {
  /// Reads a JSON configuration file.
  ///
  /// # Errors
  /// - The file cannot be read
  /// - The file is not a valid `LexdensConfig`
  pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })
  }
}

// ===== Accessor Methods =====

impl LexdensConfig {
  /// Returns the configured store path.
  ///
  /// `None` if unspecified; the caller falls back to the OS data directory.
  pub fn store_path(&self) -> Option<&Path> {
    self.store.path.as_deref()
  }

  /// Returns the words to seed into an empty store.
  pub fn vocabulary(&self) -> &[String] {
    &self.vocabulary.words
  }

  /// Returns the validation limits.
  pub fn limits(&self) -> &LimitsConfig {
    &self.limits
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `vocabulary.words` is not empty and has no blank entries
  /// - `limits.max_words` >= 1
  /// - `limits.max_characters` >= 1
  /// - `store.path` is not a directory, and its parent exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.vocabulary.words.is_empty() {
      return Err(ConfigError::EmptyVocabulary);
    }

    if let Some(index) = self.vocabulary.words.iter().position(|w| w.trim().is_empty()) {
      return Err(ConfigError::EmptyVocabularyWord { index });
    }

    if self.limits.max_words < 1 {
      return Err(ConfigError::InvalidMaxWords {
        actual: self.limits.max_words,
      });
    }

    if self.limits.max_characters < 1 {
      return Err(ConfigError::InvalidMaxCharacters {
        actual: self.limits.max_characters,
      });
    }

    if let Some(path) = &self.store.path {
      if path.is_dir() {
        return Err(ConfigError::InvalidStorePath { path: path.clone() });
      }

      if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
          return Err(ConfigError::StoreDirCreationFailed {
            path: parent.to_path_buf(),
            source: Arc::new(e),
          });
        }
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
