//! # REST API Interface Layer
//!
//! One module per resource, each exposing a `router()` that is nested
//! under `/api`. Handlers return `Result<Json<_>, ApiError>`; every
//! failure reaches the client as `{"error": "<message>"}`.

pub mod ai_apis;
pub mod budget_apis;
pub mod error;
pub mod financial_data_apis;
pub mod health_apis;
pub mod mappers;
pub mod transaction_apis;
pub mod user_apis;

#[cfg(test)]
pub mod test_utils;

pub use error::ApiError;
