//! Layered error types for the API crate.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`ClientError`] - Transport failures and non-success remote responses
//! - [`ValidationError`] - Response body deserialization errors
//! - [`ConfigError`] - Executor, environment and endpoint configuration errors

mod api_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
