//! Word Store Module
//!
//! Backing storage for the non-lexical vocabulary.
//! Records keep the casing they were inserted with; lookups compare through
//! [`comparison_key`] so membership is case-insensitive on both sides.
//!
//! Two backends are provided:
//! - [`InMemoryWordStore`]: process-local, used by tests and ad-hoc tools
//! - [`JsonFileWordStore`]: persisted to a JSON file, loaded once at open

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::NonLexicalWord;

/// File name of the persisted word list inside the data directory
pub const STORE_FILE_NAME: &str = "non_lexical_words.json";

/// Key used when comparing a stored word with a candidate token.
///
/// Applied to both sides of every comparison, never to what is stored.
pub fn comparison_key(word: &str) -> String {
  word.to_lowercase()
}

/// Storage interface for the non-lexical vocabulary
///
/// Implementations must be safe to read concurrently once seeding is done.
pub trait WordStore: Send + Sync {
  /// Returns true when a stored word matches `word` case-insensitively
  fn contains(&self, word: &str) -> bool;

  /// Number of stored records (duplicates included)
  fn count_all(&self) -> usize;

  /// Stores `word` verbatim
  ///
  /// # Errors
  /// Returns an error if the backend cannot persist the record
  fn insert(&self, word: &str) -> Result<(), StoreError>;
}

/// Records plus the lookup keys derived from them
#[derive(Debug, Default)]
struct Records {
  words: Vec<NonLexicalWord>,
  keys: HashSet<String>,
}

impl Records {
  fn from_words(words: Vec<NonLexicalWord>) -> Self {
    let keys = words.iter().map(|w| comparison_key(&w.word)).collect();
    Self { words, keys }
  }

  fn contains(&self, word: &str) -> bool {
    self.keys.contains(&comparison_key(word))
  }

  fn push(&mut self, record: NonLexicalWord) {
    self.keys.insert(comparison_key(&record.word));
    self.words.push(record);
  }
}

/// Process-local word store
#[derive(Debug, Default)]
pub struct InMemoryWordStore {
  records: RwLock<Records>,
}

impl InMemoryWordStore {
  /// Creates an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a store that already holds `words`, in order
  pub fn with_words<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let words = words.into_iter().map(NonLexicalWord::new).collect();
    Self {
      records: RwLock::new(Records::from_words(words)),
    }
  }

  /// Snapshot of stored records in insertion order
  pub fn words(&self) -> Vec<NonLexicalWord> {
    self.records.read().unwrap_or_else(PoisonError::into_inner).words.clone()
  }
}

impl WordStore for InMemoryWordStore {
  fn contains(&self, word: &str) -> bool {
    // The record set is append-only, so a poisoned guard still holds valid data
    self.records.read().unwrap_or_else(PoisonError::into_inner).contains(word)
  }

  fn count_all(&self) -> usize {
    self.records.read().unwrap_or_else(PoisonError::into_inner).words.len()
  }

  fn insert(&self, word: &str) -> Result<(), StoreError> {
    self.records.write().unwrap_or_else(PoisonError::into_inner).push(NonLexicalWord::new(word));
    Ok(())
  }
}

/// Word store persisted as a JSON array of `{"word": "..."}` records
///
/// The whole file is read on [`open`](Self::open). Each insert rewrites the
/// file through a temporary file in the same directory, so a crash never
/// leaves a half-written list behind.
#[derive(Debug)]
pub struct JsonFileWordStore {
  /// Store file path
  path: PathBuf,
  /// Loaded records
  records: RwLock<Records>,
}

impl JsonFileWordStore {
  /// Opens the store at `path`
  ///
  /// A missing file is an empty store; the file is created on first insert.
  ///
  /// # Errors
  /// - The file exists but cannot be read
  /// - The file does not contain a JSON word list
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
    let path = path.as_ref().to_path_buf();
    let words = load_records(&path)?;

    debug!(path = %path.display(), records = words.len(), "Opened word store");

    Ok(Self {
      path,
      records: RwLock::new(Records::from_words(words)),
    })
  }

  /// Opens the store at [`default_store_path`]
  ///
  /// # Errors
  /// Same as [`open`](Self::open), plus [`StoreError::DataDirNotFound`]
  pub fn open_default() -> Result<Self, StoreError> {
    Self::open(default_store_path()?)
  }

  /// Returns the path of the store file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Writes `words` to a temporary file and atomically replaces the store file
  fn persist(&self, words: &[NonLexicalWord]) -> Result<(), StoreError> {
    let dir = match self.path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
      _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
    let json =
      serde_json::to_vec_pretty(words).map_err(|e| StoreError::Serialize(Arc::new(e)))?;
    tmp.write_all(&json).map_err(|e| self.io_error(e))?;
    tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
    tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

    Ok(())
  }

  fn io_error(&self, source: io::Error) -> StoreError {
    StoreError::Io {
      path: self.path.clone(),
      source: Arc::new(source),
    }
  }
}

impl WordStore for JsonFileWordStore {
  fn contains(&self, word: &str) -> bool {
    self.records.read().unwrap_or_else(PoisonError::into_inner).contains(word)
  }

  fn count_all(&self) -> usize {
    self.records.read().unwrap_or_else(PoisonError::into_inner).words.len()
  }

  fn insert(&self, word: &str) -> Result<(), StoreError> {
    let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
    let record = NonLexicalWord::new(word);

    let mut next = records.words.clone();
    next.push(record.clone());
    self.persist(&next)?;

    records.push(record);
    Ok(())
  }
}

/// Reads the records stored at `path`
fn load_records(path: &Path) -> Result<Vec<NonLexicalWord>, StoreError> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
    Err(e) => {
      return Err(StoreError::Io {
        path: path.to_path_buf(),
        source: Arc::new(e),
      });
    }
  };

  if content.trim().is_empty() {
    return Ok(Vec::new());
  }

  serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })
}

/// Returns the default store file path according to the OS
///
/// | OS      | Example Path                                                   |
/// |---------|----------------------------------------------------------------|
/// | Linux   | `~/.local/share/lexdens/non_lexical_words.json`                 |
/// | macOS   | `~/Library/Application Support/lexdens/non_lexical_words.json`  |
/// | Windows | `C:\Users\{user}\AppData\Roaming\lexdens\non_lexical_words.json`|
pub fn default_store_path() -> Result<PathBuf, StoreError> {
  let base = dirs::data_dir().ok_or(StoreError::DataDirNotFound)?;

  Ok(base.join("lexdens").join(STORE_FILE_NAME))
}
