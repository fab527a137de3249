//! Record handlers: put, delete and scan for every record kind.
//!
//! The body is taken as raw bytes so that malformed JSON is reported through
//! the same payload contract as every other failure. All responses are
//! `200 OK`; callers inspect the payload shape to detect errors.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use partstore_core::diagnostics::HandlerOutcome;
use partstore_core::records::RecordKind;
use partstore_core::request::Operation;

use crate::state::AppState;

/// Put a record (POST /api/{record}).
pub async fn put_record(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    body: Bytes,
) -> Json<HandlerOutcome> {
    handle(&state, kind, Operation::Put, &body).await
}

/// Delete a record by key (DELETE /api/{record}).
pub async fn delete_record(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
    body: Bytes,
) -> Json<HandlerOutcome> {
    handle(&state, kind, Operation::Delete, &body).await
}

/// List every record of a kind (GET /api/{record}).
pub async fn scan_records(
    State(state): State<AppState>,
    Path(kind): Path<RecordKind>,
) -> Json<HandlerOutcome> {
    handle(&state, kind, Operation::Scan, &[]).await
}

async fn handle(
    state: &AppState,
    kind: RecordKind,
    operation: Operation,
    body: &[u8],
) -> Json<HandlerOutcome> {
    let dispatcher = state.dispatcher(kind);
    let outcome = dispatcher.dispatch_bytes(operation, body).await;

    tracing::debug!(
        record = %kind,
        table = %dispatcher.table().table_name,
        operation = %operation,
        ok = outcome.is_ok(),
        "Handled record request"
    );

    Json(outcome)
}
