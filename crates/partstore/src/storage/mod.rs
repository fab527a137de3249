//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TableStore` trait
//! defined in `partstore_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory tables, lost on restart
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory store (default):
//! ```bash
//! cargo build -p partstore
//! ```
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p partstore --no-default-features --features dynamodb
//! ```

use std::sync::Arc;

use partstore_core::storage::TableStore;

use crate::config::Config;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p partstore --features dynamodb"
);

// The in-memory store also backs the handler tests.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

/// Creates the configured store. Called once per process.
#[cfg(feature = "inmemory")]
pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn TableStore>> {
    use partstore_core::records::RecordKind;

    tracing::info!("Using in-memory storage backend");

    let tables = RecordKind::all()
        .into_iter()
        .map(|kind| config.table_spec(kind));
    Ok(Arc::new(inmemory::InMemoryStore::with_tables(tables)))
}

/// Creates the configured store. Called once per process.
#[cfg(feature = "dynamodb")]
pub async fn connect(config: &Config) -> anyhow::Result<Arc<dyn TableStore>> {
    tracing::info!(
        region = %config.aws_region,
        endpoint = config.aws_endpoint_url.as_deref().unwrap_or("default"),
        "Using DynamoDB storage backend"
    );

    Ok(Arc::new(dynamodb::DynamoDbStore::from_config(config).await))
}
