use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StoreErrorCode;

/// A store error code outside the guidance table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unrecognized store error code '{code}'")]
pub struct UnrecognizedCode {
    pub code: String,
}

/// Structured description of a recognized store failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub error_code: String,
    pub msg: String,
    pub error_help_string: String,
}

impl Diagnostic {
    /// Builds the diagnostic for a store failure.
    ///
    /// The lookup is strict: codes missing from the guidance table are
    /// returned as [`UnrecognizedCode`] instead of a best-effort message.
    pub fn from_store_error(code: &str, message: &str) -> Result<Self, UnrecognizedCode> {
        let code: StoreErrorCode = code.parse()?;
        Ok(Self::new(code, message))
    }

    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            error_code: code.as_str().to_string(),
            msg: message.into(),
            error_help_string: code.help().to_string(),
        }
    }

    /// The operational log line for this diagnostic.
    pub fn log_line(&self) -> String {
        format!(
            "[{}] {}. Error message: {}",
            self.error_code, self.error_help_string, self.msg
        )
    }
}
