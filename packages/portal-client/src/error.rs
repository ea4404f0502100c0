//! Error types for the portal API client.

use thiserror::Error;

/// Result type for portal client operations.
pub type Result<T> = std::result::Result<T, PortalError>;

/// Portal client errors.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PortalError {
    /// Failures worth a single retry: transport errors and 5xx statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            PortalError::Network(_) => true,
            PortalError::Api { status, .. } => *status >= 500,
            PortalError::Parse(_) => false,
        }
    }
}
