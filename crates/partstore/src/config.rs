use std::env;

use partstore_core::records::{RecordKind, TableSpec};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table holding storage device types (default: "storage_device_type")
    pub storage_device_type_table: String,
    /// Table holding storage device instances (default: "storage_device_instance")
    pub storage_device_instance_table: String,
    /// Table holding component types (default: "component_type")
    pub component_type_table: String,
    /// Custom store endpoint, e.g. a local DynamoDB.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1").
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_DEVICE_TYPE_TABLE` - Storage device type table name
    /// - `STORAGE_DEVICE_INSTANCE_TABLE` - Storage device instance table name
    /// - `COMPONENT_TYPE_TABLE` - Component type table name
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table = |key: &str, kind: RecordKind| {
            lookup(key).unwrap_or_else(|| kind.default_table_name().to_string())
        };

        Self {
            storage_device_type_table: table(
                "STORAGE_DEVICE_TYPE_TABLE",
                RecordKind::StorageDeviceType,
            ),
            storage_device_instance_table: table(
                "STORAGE_DEVICE_INSTANCE_TABLE",
                RecordKind::StorageDeviceInstance,
            ),
            component_type_table: table("COMPONENT_TYPE_TABLE", RecordKind::ComponentType),
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL"),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        }
    }

    /// Table name configured for a record kind.
    pub fn table_name(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::StorageDeviceType => &self.storage_device_type_table,
            RecordKind::StorageDeviceInstance => &self.storage_device_instance_table,
            RecordKind::ComponentType => &self.component_type_table,
        }
    }

    /// Table name and key schema for a record kind.
    pub fn table_spec(&self, kind: RecordKind) -> TableSpec {
        TableSpec::new(self.table_name(kind), kind.key_fields())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.storage_device_type_table, "storage_device_type");
        assert_eq!(config.storage_device_instance_table, "storage_device_instance");
        assert_eq!(config.component_type_table, "component_type");
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.aws_region, "us-east-1");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("COMPONENT_TYPE_TABLE", "prod_component_type"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.component_type_table, "prod_component_type");
        assert_eq!(config.storage_device_type_table, "storage_device_type");
        assert_eq!(
            config.aws_endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.aws_region, "eu-west-1");
    }

    #[test]
    fn test_table_spec_uses_configured_name() {
        let config = Config {
            component_type_table: "staging_component_type".to_string(),
            ..Config::default()
        };

        let spec = config.table_spec(RecordKind::ComponentType);
        assert_eq!(spec.table_name, "staging_component_type");
        assert_eq!(spec.key_fields, &["component_type_id"]);
    }
}
