//! Models module

mod request;
mod response;

pub use request::ComplexityQuery;
pub use response::ComplexityResponse;
