//! vocabulary module
pub mod seed_words;
pub mod word_set;
pub mod word_store;

/// Re-exports
pub use seed_words::{DEFAULT_NON_LEXICAL_WORDS, default_non_lexical_words};
pub use word_set::NonLexicalWordSet;
pub use word_store::{
  InMemoryWordStore, JsonFileWordStore, WordStore, comparison_key, default_store_path,
};
