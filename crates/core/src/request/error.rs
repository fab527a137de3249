use thiserror::Error;

/// Errors raised while turning a request into a store operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid JSON request: {0}")]
    InvalidJson(String),
    #[error("Request must be a JSON object")]
    NotAnObject,
    #[error("Envelope body must be a JSON string")]
    EnvelopeNotString,
    #[error("Invalid JSON in envelope body: {0}")]
    InvalidBody(String),
    #[error("Missing key field '{field}'")]
    MissingKey { field: String },
    #[error("Key field '{field}' must be a string or a number")]
    InvalidKey { field: String },
    #[error("Field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Request targets table '{requested}' but this handler serves '{expected}'")]
    TableMismatch { requested: String, expected: String },
    #[error("Unsupported put parameter '{0}'")]
    UnsupportedParameter(String),
}

/// Result type for request handling.
pub type Result<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let error = RequestError::MissingKey {
            field: "storage_device_type_id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing key field 'storage_device_type_id'"
        );
    }

    #[test]
    fn test_table_mismatch_display() {
        let error = RequestError::TableMismatch {
            requested: "component_type".to_string(),
            expected: "storage_device_type".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request targets table 'component_type' but this handler serves 'storage_device_type'"
        );
    }
}
