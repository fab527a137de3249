use async_trait::async_trait;

use super::{Item, PutItemRequest, Result, ScanOutput, WriteAck};

/// The narrow slice of a key-value table store the handlers consume.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Writes an item, replacing any item with the same key.
    async fn put_item(&self, request: PutItemRequest) -> Result<WriteAck>;

    /// Deletes the item with the given key. Deleting a missing item succeeds.
    async fn delete_item(&self, table_name: &str, key: Item) -> Result<WriteAck>;

    /// Returns one page of a full-table scan.
    async fn scan(&self, table_name: &str) -> Result<ScanOutput>;
}
