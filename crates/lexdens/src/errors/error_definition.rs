//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (LexdensConfig) related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// vocabulary.words is empty
  #[error("vocabulary.words must contain at least one word")]
  EmptyVocabulary,

  /// An entry of vocabulary.words is empty or whitespace only
  #[error("vocabulary.words contains an empty entry at position {index}")]
  EmptyVocabularyWord {
    /// Position of the offending entry
    index: usize,
  },

  /// limits.max_words < 1
  #[error("limits.max_words must be 1 or greater: actual={actual}")]
  InvalidMaxWords {
    /// Value actually specified
    actual: usize,
  },

  /// limits.max_characters < 1
  #[error("limits.max_characters must be 1 or greater: actual={actual}")]
  InvalidMaxCharacters {
    /// Value actually specified
    actual: usize,
  },

  /// store.path points at a directory
  #[error("store.path must be a file, not a directory: path={path:?}")]
  InvalidStorePath {
    /// Offending path
    path: PathBuf,
  },

  /// Parent directory of store.path could not be created
  #[error("failed to create the store directory: path={path:?}, error={source}")]
  StoreDirCreationFailed {
    /// Directory that was being created
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Configuration file could not be read
  #[error("failed to read configuration file: path={path:?}, error={source}")]
  ReadFailed {
    /// Configuration file path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Configuration file is not valid JSON for `LexdensConfig`
  #[error("failed to parse configuration file: path={path:?}, error={source}")]
  ParseFailed {
    /// Configuration file path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// Word store related errors
///
/// Raised while opening or writing the persisted non-lexical word set.
/// Any of these at startup means the service refuses to run.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StoreError {
  /// OS data directory could not be determined
  #[error("could not determine a data directory for the word store")]
  DataDirNotFound,

  /// Reading or writing the store file failed
  #[error("word store IO error: path={path:?}, error={source}")]
  Io {
    /// Store file path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Store file exists but does not hold a JSON word list
  #[error("word store file is malformed: path={path:?}, error={source}")]
  Malformed {
    /// Store file path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// Serializing the records failed
  #[error("failed to serialize word store records: {0}")]
  Serialize(Arc<serde_json::Error>),
}

/// Input validation errors
///
/// The `Display` text is the message returned to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// `mode` was supplied with a value other than `verbose`
  #[error("If included, the `mode` parameter must be set to `verbose`.")]
  InvalidMode {
    /// Value supplied by the caller
    mode: String,
  },

  /// Too many space separated words
  #[error("Invalid text length. A maximum of {max} separate words may be used.")]
  TooManyWords {
    /// Number of words counted
    count: usize,
    /// Configured maximum
    max: usize,
  },

  /// Too many characters once punctuation is replaced
  #[error(
    "Invalid text length. A maximum of {max} characters may be used, not including punctuation."
  )]
  TooManyCharacters {
    /// Length in UTF-16 code units
    length: usize,
    /// Configured maximum
    max: usize,
  },

  /// Nothing left to analyze once punctuation is replaced
  #[error("Invalid text. At least one word must be supplied.")]
  NoWords,
}

impl ValidationError {
  /// HTTP-equivalent status code for this error
  #[must_use]
  pub fn status_code(&self) -> u16 {
    400
  }
}

/// Unified error
/// Public APIs of this crate return this error
/// Use as `LexdensResult<T>` = `Result<T, LexdensError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexdensError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Word store error
  #[error(transparent)]
  Store(#[from] StoreError),

  /// Input validation error
  #[error(transparent)]
  Validation(#[from] ValidationError),
}

/// Standard Result type alias for the lexdens crate
pub type LexdensResult<T> = Result<T, LexdensError>;
