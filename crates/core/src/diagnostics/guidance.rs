use std::fmt;
use std::str::FromStr;

use super::UnrecognizedCode;

/// The store error codes with known remediation advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorCode {
    // Operation specific errors
    ConditionalCheckFailedException,
    TransactionConflictException,
    ItemCollectionSizeLimitExceededException,
    // Common errors
    InternalServerError,
    ProvisionedThroughputExceededException,
    ResourceNotFoundException,
    ServiceUnavailable,
    ThrottlingException,
    UnrecognizedClientException,
    ValidationException,
    RequestLimitExceeded,
}

impl StoreErrorCode {
    pub const ALL: [StoreErrorCode; 11] = [
        StoreErrorCode::ConditionalCheckFailedException,
        StoreErrorCode::TransactionConflictException,
        StoreErrorCode::ItemCollectionSizeLimitExceededException,
        StoreErrorCode::InternalServerError,
        StoreErrorCode::ProvisionedThroughputExceededException,
        StoreErrorCode::ResourceNotFoundException,
        StoreErrorCode::ServiceUnavailable,
        StoreErrorCode::ThrottlingException,
        StoreErrorCode::UnrecognizedClientException,
        StoreErrorCode::ValidationException,
        StoreErrorCode::RequestLimitExceeded,
    ];

    /// The code exactly as the store reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreErrorCode::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            StoreErrorCode::TransactionConflictException => "TransactionConflictException",
            StoreErrorCode::ItemCollectionSizeLimitExceededException => {
                "ItemCollectionSizeLimitExceededException"
            }
            StoreErrorCode::InternalServerError => "InternalServerError",
            StoreErrorCode::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            StoreErrorCode::ResourceNotFoundException => "ResourceNotFoundException",
            StoreErrorCode::ServiceUnavailable => "ServiceUnavailable",
            StoreErrorCode::ThrottlingException => "ThrottlingException",
            StoreErrorCode::UnrecognizedClientException => "UnrecognizedClientException",
            StoreErrorCode::ValidationException => "ValidationException",
            StoreErrorCode::RequestLimitExceeded => "RequestLimitExceeded",
        }
    }

    /// Remediation advice returned to the caller as `error_help_string`.
    pub fn help(&self) -> &'static str {
        match self {
            StoreErrorCode::ConditionalCheckFailedException => {
                "Condition check specified in the operation failed, review and update the condition check before retrying"
            }
            StoreErrorCode::TransactionConflictException => {
                "Operation was rejected because there is an ongoing transaction for the item, generally safe to retry with exponential back-off"
            }
            StoreErrorCode::ItemCollectionSizeLimitExceededException => {
                "An item collection is too large, you're using Local Secondary Index and exceeded size limit of items per partition key. Consider using Global Secondary Index instead"
            }
            StoreErrorCode::InternalServerError => {
                "Internal Server Error, generally safe to retry with exponential back-off"
            }
            StoreErrorCode::ProvisionedThroughputExceededException => {
                "Request rate is too high. If you're using a custom retry strategy make sure to retry with exponential back-off. Otherwise consider reducing frequency of requests or increasing provisioned capacity for your table or secondary index"
            }
            StoreErrorCode::ResourceNotFoundException => {
                "One of the tables was not found, verify table exists before retrying"
            }
            StoreErrorCode::ServiceUnavailable => {
                "Had trouble reaching DynamoDB. generally safe to retry with exponential back-off"
            }
            StoreErrorCode::ThrottlingException => {
                "Request denied due to throttling, generally safe to retry with exponential back-off"
            }
            StoreErrorCode::UnrecognizedClientException => {
                "The request signature is incorrect most likely due to an invalid AWS access key ID or secret key, fix before retrying"
            }
            StoreErrorCode::ValidationException => {
                "The input fails to satisfy the constraints specified by DynamoDB, fix input before retrying"
            }
            StoreErrorCode::RequestLimitExceeded => {
                "Throughput exceeds the current throughput limit for your account, increase account level throughput before retrying"
            }
        }
    }

    /// Whether the guidance says the request may be retried unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StoreErrorCode::TransactionConflictException
                | StoreErrorCode::InternalServerError
                | StoreErrorCode::ServiceUnavailable
                | StoreErrorCode::ThrottlingException
        )
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreErrorCode {
    type Err = UnrecognizedCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoreErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnrecognizedCode {
                code: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_parses_back() {
        for code in StoreErrorCode::ALL {
            assert_eq!(code.as_str().parse::<StoreErrorCode>(), Ok(code));
        }
    }

    #[test]
    fn test_every_code_has_help() {
        for code in StoreErrorCode::ALL {
            assert!(!code.help().is_empty(), "{code} has no help text");
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            "AccessDeniedException".parse::<StoreErrorCode>(),
            Err(UnrecognizedCode {
                code: "AccessDeniedException".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!("throttlingexception".parse::<StoreErrorCode>().is_err());
    }

    #[test]
    fn test_retryable_codes() {
        assert!(StoreErrorCode::ThrottlingException.is_retryable());
        assert!(StoreErrorCode::ServiceUnavailable.is_retryable());
        assert!(!StoreErrorCode::ValidationException.is_retryable());
        assert!(!StoreErrorCode::ConditionalCheckFailedException.is_retryable());
    }
}
