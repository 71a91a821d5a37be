//! Transport and remote status errors.

use thiserror::Error;

/// Errors from the HTTP layer.
///
/// Neither variant is retried; both propagate straight to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    ///
    /// DNS failures, refused connections and timeouts all land here without
    /// further classification.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a status code above 300.
    ///
    /// Displays as the server's status description, verbatim.
    #[error("{message}")]
    RemoteService {
        /// The HTTP status code returned.
        status: u16,
        /// The status description supplied with the response.
        message: String,
    },
}

impl ClientError {
    /// Returns the HTTP status code if the server responded.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Returns `true` if the failure happened before a response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
