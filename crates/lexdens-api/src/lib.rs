//! lexdens-api crate
//!
//! Web server exposing the lexical density calculation as an HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Welcome message
//! - `GET /complexity?text=...&mode=verbose` - Lexical density
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl "http://127.0.0.1:5530/complexity?mode=verbose&text=The%20quick%20brown%20fox."
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ComplexityQuery, ComplexityResponse};
pub use service::LexdensApiServiceFull;
