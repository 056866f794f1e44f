//! Non-lexical word set
//!
//! Case-insensitive membership over the function-word vocabulary, plus the
//! one-time seeding step run at startup.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::word_store::WordStore;
use crate::errors::StoreError;

/// Membership test against the non-lexical vocabulary
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct NonLexicalWordSet {
  store: Arc<dyn WordStore>,
}

impl NonLexicalWordSet {
  /// Wraps a word store
  pub fn new(store: Arc<dyn WordStore>) -> Self {
    Self { store }
  }

  /// Returns true when `word` is a non-lexical word, ignoring case
  ///
  /// The empty string is never a member.
  pub fn contains(&self, word: &str) -> bool {
    if word.is_empty() {
      return false;
    }
    self.store.contains(&word.to_lowercase())
  }

  /// Number of records in the backing store
  pub fn len(&self) -> usize {
    self.store.count_all()
  }

  /// Returns true if the backing store holds no records
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Inserts `words` verbatim and in order, but only into an empty store
  ///
  /// Returns the number of records written; `0` when the store was already
  /// populated.
  ///
  /// # Errors
  /// Returns an error if the store fails to persist a record
  pub fn seed_if_empty<S: AsRef<str>>(&self, words: &[S]) -> Result<usize, StoreError> {
    let existing = self.store.count_all();
    if existing > 0 {
      info!(existing, "Word store is populated, skipping seeding");
      return Ok(0);
    }

    info!(words = words.len(), "Word store is empty, seeding non-lexical words");
    for word in words {
      let word = word.as_ref();
      debug!(word, "Seeding word");
      self.store.insert(word)?;
    }

    let inserted = self.store.count_all();
    info!(inserted, "Seeding complete");
    Ok(inserted)
  }
}

impl fmt::Debug for NonLexicalWordSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // `dyn WordStore` has no Debug bound, show the record count instead
    f.debug_struct("NonLexicalWordSet").field("records", &self.store.count_all()).finish()
  }
}
