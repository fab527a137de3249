use std::fmt::Display;

use serde::Serialize;
use serde_json::{json, Value};

use super::Diagnostic;
use crate::request::Operation;

/// What a handler returns to its caller.
///
/// Every variant travels through the transport's success channel; callers
/// tell them apart by payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HandlerOutcome {
    /// The store's response, passed through unchanged.
    Ok(Value),
    /// A store failure with a code from the guidance table.
    RecognizedFailure(Diagnostic),
    /// Any other failure, described by a single message.
    UnknownFailure { message: String },
}

impl HandlerOutcome {
    /// Builds the generic failure payload for `operation`.
    pub fn unknown(operation: Operation, details: impl Display) -> Self {
        HandlerOutcome::UnknownFailure {
            message: format!("Unknown error while {}: {details}", operation.verb()),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, HandlerOutcome::Ok(_))
    }

    /// The JSON payload sent to the caller.
    pub fn into_value(self) -> Value {
        match self {
            HandlerOutcome::Ok(value) => value,
            HandlerOutcome::RecognizedFailure(diagnostic) => json!({
                "error_code": diagnostic.error_code,
                "msg": diagnostic.msg,
                "error_help_string": diagnostic.error_help_string,
            }),
            HandlerOutcome::UnknownFailure { message } => json!({ "message": message }),
        }
    }
}
