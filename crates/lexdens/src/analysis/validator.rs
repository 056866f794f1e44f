//! Input validation
//!
//! Checks run in a fixed order and only the first failure is reported:
//! mode, word count, character count, empty text.

use crate::config::LimitsConfig;
use crate::errors::ValidationError;
use crate::models::AnalysisMode;

use super::normalizer::{normalize, word_count};

/// Rejects malformed analysis requests before any word lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
  max_words: usize,
  max_characters: usize,
}

impl Default for InputValidator {
  fn default() -> Self {
    Self::new(&LimitsConfig::default())
  }
}

impl InputValidator {
  /// Builds a validator from the configured limits
  pub fn new(limits: &LimitsConfig) -> Self {
    Self {
      max_words: limits.max_words,
      max_characters: limits.max_characters,
    }
  }

  /// Validates `text` and the optional `mode` parameter
  ///
  /// Word and character counts are taken on the text with punctuation
  /// replaced and periods kept. Characters are counted in UTF-16 code units,
  /// so a character outside the Basic Multilingual Plane counts twice.
  ///
  /// # Errors
  /// - `mode` is present and is not `verbose` (any case)
  /// - more than `max_words` words
  /// - more than `max_characters` characters
  /// - no words at all
  pub fn validate(&self, text: &str, mode: Option<&str>) -> Result<(), ValidationError> {
    if let Some(mode) = mode.filter(|m| !m.is_empty() && !AnalysisMode::is_verbose_param(m)) {
      return Err(ValidationError::InvalidMode {
        mode: mode.to_string(),
      });
    }

    let normalized = normalize(text, false);

    let count = word_count(&normalized);
    if count > self.max_words {
      return Err(ValidationError::TooManyWords {
        count,
        max: self.max_words,
      });
    }

    let length = normalized.encode_utf16().count();
    if length > self.max_characters {
      return Err(ValidationError::TooManyCharacters {
        length,
        max: self.max_characters,
      });
    }

    if count == 0 {
      return Err(ValidationError::NoWords);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn validator() -> InputValidator {
    InputValidator::default()
  }

  #[test]
  fn accepts_plain_sentence() {
    let v = validator();
    assert_eq!(v.validate("The quick brown fox jumps over the lazy dog.", None), Ok(()));
    assert_eq!(
      v.validate("The quick brown fox.", Some("verbose")),
      Ok(())
    );
    assert_eq!(v.validate("The quick brown fox.", Some("VERBOSE")), Ok(()));
  }

  #[test]
  fn empty_mode_counts_as_absent() {
    assert_eq!(validator().validate("fox", Some("")), Ok(()));
  }

  #[test]
  fn rejects_invalid_mode() {
    let err = validator().validate("fox", Some("INVALID")).unwrap_err();
    assert_eq!(
      err,
      ValidationError::InvalidMode {
        mode: "INVALID".to_string()
      }
    );
    assert_eq!(
      err.to_string(),
      "If included, the `mode` parameter must be set to `verbose`."
    );
  }

  #[test]
  fn rejects_more_than_100_words() {
    let text = "This text has over 100 words in it. ".repeat(13);
    let err = validator().validate(&text, None).unwrap_err();
    assert_eq!(err, ValidationError::TooManyWords { count: 104, max: 100 });
  }

  #[test]
  fn accepts_exactly_100_words() {
    let text = "word ".repeat(100);
    assert_eq!(validator().validate(&text, None), Ok(()));
  }

  #[test]
  fn newline_separated_lines_still_count_words() {
    let text = "\n                This text has over 100 words in it.".repeat(13);
    let err = validator().validate(&text, None).unwrap_err();
    assert!(matches!(err, ValidationError::TooManyWords { .. }));
  }

  #[test]
  fn rejects_more_than_1000_characters() {
    let text = "Thistexthasover1000charactersinit ".repeat(34);
    let err = validator().validate(&text, None).unwrap_err();
    assert_eq!(
      err,
      ValidationError::TooManyCharacters {
        length: 34 * 34,
        max: 1000
      }
    );
    assert_eq!(
      err.to_string(),
      "Invalid text length. A maximum of 1000 characters may be used, not including punctuation."
    );
  }

  #[test]
  fn character_limit_counts_replaced_punctuation() {
    // Replaced punctuation becomes spaces and still counts toward the length
    let text = format!("fox{}", ",".repeat(1000));
    let err = validator().validate(&text, None).unwrap_err();
    assert!(matches!(err, ValidationError::TooManyCharacters { length: 1003, .. }));
  }

  #[test]
  fn character_limit_counts_utf16_units() {
    // 501 astral characters are 1002 UTF-16 units
    let text = "\u{1F600}".repeat(501);
    let err = validator().validate(&text, None).unwrap_err();
    assert_eq!(
      err,
      ValidationError::TooManyCharacters {
        length: 1002,
        max: 1000
      }
    );

    assert_eq!(validator().validate(&"\u{1F600}".repeat(500), None), Ok(()));
    assert_eq!(validator().validate(&"\u{e9}".repeat(1000), None), Ok(()));
  }

  #[test]
  fn mode_is_checked_before_length() {
    let text = "word ".repeat(500);
    let err = validator().validate(&text, Some("loud")).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidMode { .. }));
  }

  #[test]
  fn word_count_is_checked_before_characters() {
    let text = "word ".repeat(300);
    let err = validator().validate(&text, None).unwrap_err();
    assert!(matches!(err, ValidationError::TooManyWords { .. }));
  }

  #[test]
  fn rejects_text_without_words() {
    assert_eq!(validator().validate("   ", None), Err(ValidationError::NoWords));
    assert_eq!(validator().validate("!!! ,,,", None), Err(ValidationError::NoWords));
  }

  #[test]
  fn periods_alone_are_a_word_during_validation() {
    // Periods are kept while validating, so "..." is one word here
    assert_eq!(validator().validate("...", None), Ok(()));
  }

  #[test]
  fn custom_limits_are_used_in_messages() {
    let limits = LimitsConfig {
      max_words: 3,
      max_characters: 10,
    };
    let v = InputValidator::new(&limits);

    let err = v.validate("one two three four", None).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Invalid text length. A maximum of 3 separate words may be used."
    );

    let err = v.validate("abcdefghijk", None).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Invalid text length. A maximum of 10 characters may be used, not including punctuation."
    );
  }
}
