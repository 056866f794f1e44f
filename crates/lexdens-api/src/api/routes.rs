//! Router definition

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{get_complexity, get_index, health_check, not_found};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(get_index))
    .route("/complexity", get(get_complexity))
    .route("/health", get(health_check))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("Failed to bind {addr}: {e}")))?;

  tracing::info!("Server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("Server error: {e}")))?;

  Ok(())
}
