use thiserror::Error;

use crate::diagnostics::StoreErrorCode;

/// Errors reported by a [`TableStore`](super::TableStore).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected the request with an error code of its own.
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Creates a service error from a raw store error code.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a service error from one of the known store error codes.
    pub fn from_code(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self::service(code.as_str(), message)
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
