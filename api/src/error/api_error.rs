//! Top-level API error type.

use super::{ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all API operations.
///
/// Every failure is terminal for the call in progress and leaves the
/// [`Executor`](crate::Executor) usable for the next one.
///
/// ## Examples
///
/// ```rust,ignore
/// use ccb_api::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Client(e) => eprintln!("Request failed: {e}"),
///         ApiError::Validation(e) => eprintln!("Unreadable response: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failures and remote status errors.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response body did not match the expected format or shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors, detected before any network activity.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` if the remote service answered with a status above 300.
    pub fn is_remote_service(&self) -> bool {
        matches!(self, Self::Client(ClientError::RemoteService { .. }))
    }

    /// Returns `true` if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Client(ClientError::Transport(_)))
    }

    /// Returns `true` if the response body could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the remote HTTP status code, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}
