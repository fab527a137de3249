//! In-memory table store implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use partstore_core::diagnostics::StoreErrorCode;
use partstore_core::records::TableSpec;
use partstore_core::storage::{
    Item, PutItemRequest, Result, ScanOutput, StoreError, TableStore, WriteAck,
};

use super::condition::Condition;

/// In-memory emulation of the table store.
///
/// Reproduces the store behaviour the handlers depend on: unknown tables,
/// key schema validation, idempotent deletes and simple conditional puts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

#[derive(Debug)]
struct Table {
    key_fields: &'static [&'static str],
    /// Items by serialized primary key, which keeps scans in key order.
    items: BTreeMap<String, Item>,
}

impl InMemoryStore {
    /// Creates a store with the given tables, all empty.
    pub fn with_tables(tables: impl IntoIterator<Item = TableSpec>) -> Self {
        let tables = tables
            .into_iter()
            .map(|spec| (spec.table_name, Table::new(spec.key_fields)))
            .collect();

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }
}

impl Table {
    fn new(key_fields: &'static [&'static str]) -> Self {
        Self {
            key_fields,
            items: BTreeMap::new(),
        }
    }

    /// Serialized primary key of an item about to be written.
    fn item_key(&self, item: &Item) -> Result<String> {
        let values = self
            .key_fields
            .iter()
            .map(|field| match item.get(*field) {
                None => Err(validation(format!(
                    "One or more parameter values were invalid: Missing the key {field} in the item"
                ))),
                Some(value) => key_value(field, value),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Value::Array(values).to_string())
    }

    /// Serialized primary key from a key-only map.
    fn lookup_key(&self, key: &Item) -> Result<String> {
        let matches_schema = key.len() == self.key_fields.len()
            && self.key_fields.iter().all(|field| key.contains_key(*field));

        if !matches_schema {
            return Err(validation(
                "The provided key element does not match the schema",
            ));
        }

        self.item_key(key)
    }
}

fn key_value(field: &str, value: &Value) -> Result<Value> {
    match value {
        Value::String(s) if s.is_empty() => Err(validation(format!(
            "One or more parameter values are not valid. The AttributeValue for a key \
             attribute cannot contain an empty string value. Key: {field}"
        ))),
        Value::String(_) | Value::Number(_) => Ok(value.clone()),
        _ => Err(validation(format!(
            "One or more parameter values were invalid: Type mismatch for key {field}"
        ))),
    }
}

fn validation(message: impl Into<String>) -> StoreError {
    StoreError::from_code(StoreErrorCode::ValidationException, message)
}

fn resource_not_found() -> StoreError {
    StoreError::from_code(
        StoreErrorCode::ResourceNotFoundException,
        "Requested resource not found",
    )
}

#[async_trait]
impl TableStore for InMemoryStore {
    async fn put_item(&self, request: PutItemRequest) -> Result<WriteAck> {
        let condition = request
            .condition_expression
            .as_deref()
            .map(|expression| {
                Condition::parse(expression, request.expression_attribute_names.as_ref())
            })
            .transpose()
            .map_err(|e| validation(e.to_string()))?;

        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(&request.table_name)
            .ok_or_else(resource_not_found)?;

        let key = table.item_key(&request.item)?;

        if let Some(condition) = condition {
            if !condition.holds(table.items.get(&key)) {
                return Err(StoreError::from_code(
                    StoreErrorCode::ConditionalCheckFailedException,
                    "The conditional request failed",
                ));
            }
        }

        table.items.insert(key, request.item);
        Ok(WriteAck::default())
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<WriteAck> {
        let mut tables = self.tables.write().await;
        let table = tables.get_mut(table_name).ok_or_else(resource_not_found)?;

        let key = table.lookup_key(&key)?;
        table.items.remove(&key);
        Ok(WriteAck::default())
    }

    async fn scan(&self, table_name: &str) -> Result<ScanOutput> {
        let tables = self.tables.read().await;
        let table = tables.get(table_name).ok_or_else(resource_not_found)?;

        Ok(ScanOutput::from_items(
            table.items.values().cloned().collect(),
        ))
    }
}
