//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `partstore_core::storage`.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use partstore_core::storage::StoreError;

/// Map any SDK operation error to StoreError.
///
/// Service errors keep the code and message DynamoDB reported so the
/// dispatcher can look them up in the guidance table. Everything else
/// (dispatch, timeout, response parsing) is a connection failure.
pub fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    if let SdkError::ServiceError(context) = &err {
        let service_error = context.err();
        if let Some(code) = service_error.code() {
            return StoreError::service(code, service_error.message().unwrap_or_default());
        }
    }

    StoreError::ConnectionFailed(DisplayErrorContext(&err).to_string())
}
