use std::collections::BTreeMap;

use serde::Serialize;

/// A stored record: field names mapped to JSON values, kept verbatim.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Input of a put operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PutItemRequest {
    pub table_name: String,
    pub item: Item,
    pub condition_expression: Option<String>,
    pub expression_attribute_names: Option<BTreeMap<String, String>>,
    pub expression_attribute_values: Option<Item>,
}

impl PutItemRequest {
    /// Creates an unconditional put of `item` into `table_name`.
    pub fn new(table_name: impl Into<String>, item: Item) -> Self {
        Self {
            table_name: table_name.into(),
            item,
            ..Default::default()
        }
    }
}

/// Response metadata attached to every store response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseMetadata {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "HTTPStatusCode")]
    pub http_status_code: u16,
}

impl ResponseMetadata {
    pub fn ok(request_id: Option<String>) -> Self {
        Self {
            request_id,
            http_status_code: 200,
        }
    }
}

impl Default for ResponseMetadata {
    fn default() -> Self {
        Self::ok(None)
    }
}

/// Acknowledgement of a put or delete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteAck {
    pub response_metadata: ResponseMetadata,
}

impl WriteAck {
    pub fn new(request_id: Option<String>) -> Self {
        Self {
            response_metadata: ResponseMetadata::ok(request_id),
        }
    }
}

/// A single page of scan results.
///
/// `last_evaluated_key` is set when the store stopped before the end of the
/// table; the handlers return it as-is and never request further pages.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    pub items: Vec<Item>,
    pub count: usize,
    pub scanned_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<Item>,
    pub response_metadata: ResponseMetadata,
}

impl ScanOutput {
    /// Creates a complete (untruncated) page holding `items`.
    pub fn from_items(items: Vec<Item>) -> Self {
        let count = items.len();
        Self {
            items,
            count,
            scanned_count: count,
            last_evaluated_key: None,
            response_metadata: ResponseMetadata::default(),
        }
    }
}
