//! analysis module
pub mod calculator;
pub mod normalizer;
pub mod validator;

/// Re-exports
pub use calculator::LexicalDensityCalculator;
pub use normalizer::{normalize, sentences, tokenize, word_count};
pub use validator::InputValidator;
