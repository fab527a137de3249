use serde_json::Value;

use super::{RequestError, Result};
use crate::storage::Item;

/// Name of the field a transport envelope stores the serialized payload in.
pub const ENVELOPE_FIELD: &str = "body";

/// An inbound request payload, either as sent or wrapped in an envelope.
///
/// Built once at the handler's entry and resolved once with
/// [`Payload::into_object`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Raw(Item),
    Enveloped { body: String },
}

impl Payload {
    /// Classifies a JSON request. Any object carrying a `body` field is an
    /// envelope.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut object) = value else {
            return Err(RequestError::NotAnObject);
        };

        match object.remove(ENVELOPE_FIELD) {
            None => Ok(Payload::Raw(object)),
            Some(Value::String(body)) => Ok(Payload::Enveloped { body }),
            Some(_) => Err(RequestError::EnvelopeNotString),
        }
    }

    /// Parses raw request bytes and classifies them.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| RequestError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Unwraps the envelope if there is one, yielding the operation input.
    pub fn into_object(self) -> Result<Item> {
        match self {
            Payload::Raw(object) => Ok(object),
            Payload::Enveloped { body } => match serde_json::from_str(&body) {
                Ok(Value::Object(object)) => Ok(object),
                Ok(_) => Err(RequestError::NotAnObject),
                Err(e) => Err(RequestError::InvalidBody(e.to_string())),
            },
        }
    }
}
