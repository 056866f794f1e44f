//! Service module

mod lexdens_api_service;

pub use lexdens_api_service::{LexdensApiService, LexdensApiServiceFull};
