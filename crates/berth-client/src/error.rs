//! Error types for release server operations

use thiserror::Error;

/// Release server client errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    // ============ Configuration Errors ============
    #[error("Invalid server address: {endpoint} - {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    // ============ Network Errors ============
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("HTTP error: {message}")]
    Http { message: String },

    // ============ Server Errors ============
    #[error("Server rejected request ({status}): {message}")]
    Server { status: u16, message: String },

    // ============ Other ============
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Whether the server could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Connection { .. } | ClientError::Timeout { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http {
            message: e.to_string(),
        }
    }
}

impl From<berth_core::CoreError> for ClientError {
    fn from(e: berth_core::CoreError) -> Self {
        ClientError::Serialization(e.to_string())
    }
}
