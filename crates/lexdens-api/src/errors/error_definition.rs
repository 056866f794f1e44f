//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// Import error types from the lexdens crate
use lexdens::errors::{LexdensError, ValidationError};

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input value
  InvalidInput,
  /// Text is too long
  TextTooLong,
  /// No such route
  NotFound,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::NotFound => "not_found",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
///
/// Input errors display their message unchanged, since that text is what
/// the caller reads.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input value
  #[error("{0}")]
  InvalidInput(String),

  /// Text is too long
  #[error("{0}")]
  TextTooLong(String),

  /// No such route
  #[error("Not found: {0}")]
  NotFound(String),

  /// Internal error
  #[error("Internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_) => ApiErrorKind::TextTooLong,
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a text too long error
  #[must_use]
  pub fn text_too_long(message: impl Into<String>) -> Self {
    Self::TextTooLong(message.into())
  }

  /// Creates a not found error
  #[must_use]
  pub fn not_found(path: impl Into<String>) -> Self {
    Self::NotFound(path.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of the error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from ValidationError to ApiError
impl From<ValidationError> for ApiError {
  fn from(err: ValidationError) -> Self {
    match err {
      ValidationError::TooManyWords { .. } | ValidationError::TooManyCharacters { .. } => {
        ApiError::text_too_long(err.to_string())
      }
      _ => ApiError::invalid_input(err.to_string()),
    }
  }
}

/// Conversion from LexdensError to ApiError
///
/// Maps domain layer errors to API layer errors.
impl From<LexdensError> for ApiError {
  fn from(err: LexdensError) -> Self {
    match err {
      LexdensError::Validation(err) => err.into(),
      LexdensError::Config(err) => ApiError::config(err.to_string()),
      LexdensError::Store(err) => ApiError::config(format!("word store unavailable: {err}")),
      // Handle variants added in the future, as the enum is #[non_exhaustive]
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;
  use lexdens::errors::{ConfigError, StoreError};

  #[test]
  fn invalid_input_creation() {
    let err = ApiError::invalid_input("test error");
    assert_eq!(err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "test error");
  }

  #[test]
  fn text_too_long_creation() {
    let err = ApiError::text_too_long("too long");
    assert_eq!(err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(err.code(), "text_too_long");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn not_found_creation() {
    let err = ApiError::not_found("/nowhere");
    assert_eq!(err.code(), "not_found");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert!(err.to_string().contains("/nowhere"));
  }

  #[test]
  fn internal_creation() {
    let err = ApiError::internal("internal processing error");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.code(), "internal_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("config file not found");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.code(), "config_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn from_validation_invalid_mode_keeps_message() {
    let lexdens_err = LexdensError::Validation(ValidationError::InvalidMode {
      mode: "INVALID".to_string(),
    });
    let api_err: ApiError = lexdens_err.into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidInput);
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
      api_err.to_string(),
      "If included, the `mode` parameter must be set to `verbose`."
    );
  }

  #[test]
  fn from_validation_length_errors() {
    let api_err: ApiError = ValidationError::TooManyWords { count: 101, max: 100 }.into();
    assert_eq!(api_err.kind(), ApiErrorKind::TextTooLong);
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);

    let api_err: ApiError = ValidationError::TooManyCharacters {
      length: 1001,
      max: 1000,
    }
    .into();
    assert_eq!(api_err.kind(), ApiErrorKind::TextTooLong);
  }

  #[test]
  fn from_validation_no_words() {
    let api_err: ApiError = ValidationError::NoWords.into();
    assert_eq!(api_err.kind(), ApiErrorKind::InvalidInput);
  }

  #[test]
  fn from_lexdens_config_and_store() {
    let api_err: ApiError = LexdensError::Config(ConfigError::EmptyVocabulary).into();
    assert_eq!(api_err.code(), "config_error");

    let api_err: ApiError = LexdensError::Store(StoreError::DataDirNotFound).into();
    assert_eq!(api_err.code(), "config_error");
    assert!(api_err.to_string().contains("word store unavailable"));
  }
}
