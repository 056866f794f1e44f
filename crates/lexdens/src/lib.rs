//! lexdens lexical density library
//!
//! Computes the ratio of lexical (content) words to total words in short
//! English texts, overall and per sentence.

/// Analysis module - normalization, density calculation and input validation
pub mod analysis;

/// Config module - LexdensConfig and its sections
pub mod config;

/// Error module - LexdensError, LexdensResult and friends
pub mod errors;

/// Data model module - AnalysisResult, Density, NonLexicalWord etc.
pub mod models;

/// Service module - LexdensService facade
pub mod service;

/// Vocabulary module - non-lexical word set and its stores
pub mod vocabulary;

/// Re-exports
pub use config::LexdensConfig;
pub use errors::{LexdensError, LexdensResult};
pub use service::LexdensService;
