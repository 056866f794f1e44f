//! lexdens-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lexdens_api::ApiError;
use lexdens_api::api::AppState;
use lexdens_api::api::run_server;
use lexdens_api::config::Config;
use lexdens_api::service::LexdensApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Load configuration
  let config = Config::from_env()?;

  // Initialize logging (RUST_LOG wins over the configured level)
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.lexdens.log_level().as_filter_directive()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    bind_addr = %config.bind_addr,
    store = ?config.lexdens.store_path(),
    "Configuration loaded"
  );

  // Initialize the service (opens and seeds the word store before binding)
  let service = Arc::new(LexdensApiServiceFull::new(&config).inspect_err(|e| {
    tracing::error!(error = %e, "Failed to initialize the word store");
  })?);
  tracing::info!("Lexical density service initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start server
  run_server(state).await
}
