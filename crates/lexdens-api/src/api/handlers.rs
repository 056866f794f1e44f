//! HTTP handler definitions

use axum::{
  Json,
  extract::{Query, State},
  http::Uri,
  response::{IntoResponse, Response},
};
use tracing::{debug, error, info, warn};

use crate::errors::ApiError;
use crate::models::ComplexityQuery;

use super::state::AppState;

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str =
  "Lexical density service. Navigate to `/complexity` to test the API endpoint.";

/// Body of `GET /complexity` when no text is supplied
pub const COMPLEXITY_INFO: &str = "No calculation text supplied.
To conduct a lexical density analysis, send a string contained in the 'text' query parameter to this endpoint.
You may also supply the 'mode' query parameter with the value of 'verbose' to calculate both the overall
lexical density and the sentence-specific lexical density.

Example: /complexity?mode=verbose&text=the%20quick%20brown%20fox%20jumps%20over%20the%20lazy%20dog
";

/// GET / endpoint
pub async fn get_index() -> &'static str {
  WELCOME_MESSAGE
}

/// GET /complexity endpoint
///
/// Computes the lexical density of an English text.
///
/// # Query Parameters
/// - `text`: text to analyze (URL encoded)
/// - `mode`: `verbose` to include per-sentence densities
///
/// # Response
/// - 200 OK: `{"data": {...}}`, or a plain-text info message without `text`
/// - 400 Bad Request: input error (invalid mode, text too long, no words)
/// - 500 Internal Server Error: internal error
pub async fn get_complexity(
  State(state): State<AppState>,
  Query(query): Query<ComplexityQuery>,
) -> Result<Response, ApiError> {
  let Some(request) = query.into_request() else {
    debug!("Complexity request without text");
    return Ok(COMPLEXITY_INFO.into_response());
  };

  debug!(
    text_len = request.text.len(),
    mode = ?request.mode,
    "Complexity request received"
  );

  // Run the word lookups off the async runtime, the store may touch the disk
  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.analyze(request))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal("Failed to execute the analysis")
    })?
    .inspect_err(|e| warn!(code = e.code(), error = %e, "Complexity request rejected"))?;

  info!(overall_ld = %response.data.overall_ld, "Lexical density computed");

  Ok(Json(response).into_response())
}

/// Health check endpoint
///
/// Confirms the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
  debug!(%uri, "No route matched");
  ApiError::not_found(uri.path())
}
