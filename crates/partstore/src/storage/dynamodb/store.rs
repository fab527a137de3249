//! DynamoDB table store.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::RequestId;
use aws_sdk_dynamodb::Client;

use partstore_core::storage::{
    Item, PutItemRequest, ResponseMetadata, Result, ScanOutput, TableStore, WriteAck,
};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::map_sdk_error;
use crate::config::Config;

/// DynamoDB-based table store.
///
/// The client is created once per process and shared by every dispatcher.
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain, the configured region and,
    /// when set, a custom endpoint (for local DynamoDB).
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl TableStore for DynamoDbStore {
    async fn put_item(&self, request: PutItemRequest) -> Result<WriteAck> {
        let output = self
            .client
            .put_item()
            .table_name(&request.table_name)
            .set_item(Some(item_to_attributes(&request.item)))
            .set_condition_expression(request.condition_expression)
            .set_expression_attribute_names(
                request
                    .expression_attribute_names
                    .map(|names| names.into_iter().collect()),
            )
            .set_expression_attribute_values(
                request
                    .expression_attribute_values
                    .as_ref()
                    .map(item_to_attributes),
            )
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(WriteAck::new(output.request_id().map(str::to_string)))
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<WriteAck> {
        let output = self
            .client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(item_to_attributes(&key)))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(WriteAck::new(output.request_id().map(str::to_string)))
    }

    async fn scan(&self, table_name: &str) -> Result<ScanOutput> {
        let output = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let response_metadata = ResponseMetadata::ok(output.request_id().map(str::to_string));

        let items = output
            .items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect::<Result<Vec<_>>>()?;

        let last_evaluated_key = output
            .last_evaluated_key
            .as_ref()
            .map(attributes_to_item)
            .transpose()?;

        Ok(ScanOutput {
            count: usize::try_from(output.count).unwrap_or(items.len()),
            scanned_count: usize::try_from(output.scanned_count).unwrap_or(items.len()),
            items,
            last_evaluated_key,
            response_metadata,
        })
    }
}
