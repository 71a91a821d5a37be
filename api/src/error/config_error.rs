//! Executor and endpoint configuration errors.

use thiserror::Error;

/// Errors in executor, environment or endpoint configuration.
///
/// These indicate programmer or deployment mistakes and are always raised
/// before a request leaves the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An endpoint was invoked without a service name.
    #[error("Service name is empty; every endpoint must name its remote service")]
    MissingServiceName,

    /// A required environment variable is not set.
    #[error("Missing environment variable: {var}")]
    MissingEnvVar {
        /// The variable name.
        var: &'static str,
    },

    /// A content type string is neither `json` nor `xml`.
    #[error("Unknown content type: {value}")]
    UnknownContentType {
        /// The rejected value.
        value: String,
    },

    /// A timeout value could not be parsed as whole seconds.
    #[error("Invalid timeout: {value}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// A content-type override is not a valid header value.
    #[error("Invalid Content-Type header value: {value}")]
    InvalidHeader {
        /// The rejected value.
        value: String,
    },

    /// A query object did not flatten to a record of scalar fields.
    #[error("Invalid query object: {message}")]
    InvalidQueryObject {
        /// Description of the problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(var: &'static str) -> Self {
        Self::MissingEnvVar { var }
    }

    /// Creates an invalid query object error.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQueryObject {
            message: message.into(),
        }
    }
}
