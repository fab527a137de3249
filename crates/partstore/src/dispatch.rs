//! The generic request dispatcher.
//!
//! One [`Dispatcher`] serves one table. Every operation follows the same
//! shape: resolve the payload, build the store input, call the store, and
//! turn the result or failure into a [`HandlerOutcome`]. Failures never
//! escape as errors.

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use partstore_core::diagnostics::{Diagnostic, HandlerOutcome};
use partstore_core::records::TableSpec;
use partstore_core::request::{
    key_from_object, put_item_request, Operation, Payload, RequestError,
};
use partstore_core::storage::{StoreError, TableStore};

/// Dispatches put, delete and scan requests against a single table.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn TableStore>,
    table: TableSpec,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn TableStore>, table: TableSpec) -> Self {
        Self { store, table }
    }

    pub fn table(&self) -> &TableSpec {
        &self.table
    }

    /// Runs `operation` with an already parsed JSON request.
    pub async fn dispatch(&self, operation: Operation, request: Value) -> HandlerOutcome {
        match operation {
            Operation::Put => self.put(request).await,
            Operation::Delete => self.delete(request).await,
            Operation::Scan => self.scan().await,
        }
    }

    /// Runs `operation` with a raw request body.
    ///
    /// Scans ignore the body entirely.
    pub async fn dispatch_bytes(&self, operation: Operation, body: &[u8]) -> HandlerOutcome {
        if operation == Operation::Scan {
            return self.scan().await;
        }

        match serde_json::from_slice(body) {
            Ok(request) => self.dispatch(operation, request).await,
            Err(e) => self.unknown_failure(operation, RequestError::InvalidJson(e.to_string())),
        }
    }

    /// Writes the request's item to the table.
    pub async fn put(&self, request: Value) -> HandlerOutcome {
        let input = Payload::from_value(request)
            .and_then(Payload::into_object)
            .and_then(|object| put_item_request(object, &self.table.table_name));

        let input = match input {
            Ok(input) => input,
            Err(e) => return self.unknown_failure(Operation::Put, e),
        };

        tracing::debug!(table = %self.table.table_name, "Putting item");

        match self.store.put_item(input).await {
            Ok(ack) => self.respond(Operation::Put, &ack),
            Err(e) => self.store_failure(Operation::Put, e),
        }
    }

    /// Deletes the item whose key fields appear in the request.
    pub async fn delete(&self, request: Value) -> HandlerOutcome {
        let key = Payload::from_value(request)
            .and_then(Payload::into_object)
            .and_then(|object| key_from_object(&object, self.table.key_fields));

        let key = match key {
            Ok(key) => key,
            Err(e) => return self.unknown_failure(Operation::Delete, e),
        };

        tracing::debug!(table = %self.table.table_name, key = ?key, "Deleting item");

        match self.store.delete_item(&self.table.table_name, key).await {
            Ok(ack) => self.respond(Operation::Delete, &ack),
            Err(e) => self.store_failure(Operation::Delete, e),
        }
    }

    /// Returns a single page of a full-table scan.
    pub async fn scan(&self) -> HandlerOutcome {
        tracing::debug!(table = %self.table.table_name, "Scanning table");

        match self.store.scan(&self.table.table_name).await {
            Ok(output) => {
                if let Some(key) = &output.last_evaluated_key {
                    tracing::info!(
                        table = %self.table.table_name,
                        count = output.count,
                        last_evaluated_key = ?key,
                        "Scan result truncated by the store"
                    );
                }
                self.respond(Operation::Scan, &output)
            }
            Err(e) => self.store_failure(Operation::Scan, e),
        }
    }

    fn respond<T: Serialize>(&self, operation: Operation, response: &T) -> HandlerOutcome {
        match serde_json::to_value(response) {
            Ok(value) => HandlerOutcome::Ok(value),
            Err(e) => self.unknown_failure(operation, StoreError::Serialization(e.to_string())),
        }
    }

    /// Routes a store failure through the guidance table.
    fn store_failure(&self, operation: Operation, error: StoreError) -> HandlerOutcome {
        let (code, message) = match error {
            StoreError::Service { code, message } => (code, message),
            other => return self.unknown_failure(operation, other),
        };

        match Diagnostic::from_store_error(&code, &message) {
            Ok(diagnostic) => {
                tracing::warn!(
                    table = %self.table.table_name,
                    operation = %operation,
                    error_code = %diagnostic.error_code,
                    "{}",
                    diagnostic.log_line()
                );
                HandlerOutcome::RecognizedFailure(diagnostic)
            }
            Err(unrecognized) => {
                self.unknown_failure(operation, format!("{unrecognized}: {message}"))
            }
        }
    }

    fn unknown_failure(&self, operation: Operation, details: impl Display) -> HandlerOutcome {
        tracing::error!(
            table = %self.table.table_name,
            operation = %operation,
            error = %details,
            "Unknown error"
        );
        HandlerOutcome::unknown(operation, details)
    }
}
