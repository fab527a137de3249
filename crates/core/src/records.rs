//! Record kinds served by the handlers and the key schemas of their tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the `storage_device_type` table.
pub const STORAGE_DEVICE_TYPE_KEY: &[&str] = &["storage_device_type_id"];

/// Composite key of the `storage_device_instance` table.
pub const STORAGE_DEVICE_INSTANCE_KEY: &[&str] =
    &["storage_device_instance_id", "storage_device_type_id"];

/// Key of the `component_type` table.
pub const COMPONENT_TYPE_KEY: &[&str] = &["component_type_id"];

/// Error returned when parsing an unknown record kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown record kind: {0}")]
pub struct UnknownRecordKind(pub String);

/// The record kinds stored by the system, one table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "storage-device-types")]
    StorageDeviceType,
    #[serde(rename = "storage-device-instances")]
    StorageDeviceInstance,
    #[serde(rename = "component-types")]
    ComponentType,
}

impl RecordKind {
    /// Returns every record kind.
    pub fn all() -> [RecordKind; 3] {
        [
            RecordKind::StorageDeviceType,
            RecordKind::StorageDeviceInstance,
            RecordKind::ComponentType,
        ]
    }

    /// URL segment naming this record kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::StorageDeviceType => "storage-device-types",
            RecordKind::StorageDeviceInstance => "storage-device-instances",
            RecordKind::ComponentType => "component-types",
        }
    }

    /// Table name used when no override is configured.
    pub fn default_table_name(&self) -> &'static str {
        match self {
            RecordKind::StorageDeviceType => "storage_device_type",
            RecordKind::StorageDeviceInstance => "storage_device_instance",
            RecordKind::ComponentType => "component_type",
        }
    }

    /// Fields forming the primary key of this record kind's table.
    pub fn key_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::StorageDeviceType => STORAGE_DEVICE_TYPE_KEY,
            RecordKind::StorageDeviceInstance => STORAGE_DEVICE_INSTANCE_KEY,
            RecordKind::ComponentType => COMPONENT_TYPE_KEY,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownRecordKind(s.to_string()))
    }
}

/// The table a dispatcher targets: its name and key schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub table_name: String,
    pub key_fields: &'static [&'static str],
}

impl TableSpec {
    /// Creates a table spec with an explicit table name.
    pub fn new(table_name: impl Into<String>, key_fields: &'static [&'static str]) -> Self {
        Self {
            table_name: table_name.into(),
            key_fields,
        }
    }

    /// Creates the table spec for a record kind using its default table name.
    pub fn for_kind(kind: RecordKind) -> Self {
        Self::new(kind.default_table_name(), kind.key_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_names() {
        assert_eq!(
            RecordKind::StorageDeviceType.default_table_name(),
            "storage_device_type"
        );
        assert_eq!(
            RecordKind::StorageDeviceInstance.default_table_name(),
            "storage_device_instance"
        );
        assert_eq!(
            RecordKind::ComponentType.default_table_name(),
            "component_type"
        );
    }

    #[test]
    fn test_instance_key_is_composite() {
        assert_eq!(
            RecordKind::StorageDeviceInstance.key_fields(),
            &["storage_device_instance_id", "storage_device_type_id"]
        );
        assert_eq!(RecordKind::ComponentType.key_fields(), &["component_type_id"]);
    }

    #[test]
    fn test_parse_record_kind() {
        for kind in RecordKind::all() {
            assert_eq!(kind.as_str().parse::<RecordKind>(), Ok(kind));
        }
        assert_eq!(
            "widgets".parse::<RecordKind>(),
            Err(UnknownRecordKind("widgets".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_url_segments() {
        let kind: RecordKind = serde_json::from_str("\"component-types\"").unwrap();
        assert_eq!(kind, RecordKind::ComponentType);
        assert_eq!(
            serde_json::to_string(&RecordKind::StorageDeviceType).unwrap(),
            "\"storage-device-types\""
        );
    }

    #[test]
    fn test_table_spec_for_kind() {
        let spec = TableSpec::for_kind(RecordKind::StorageDeviceType);
        assert_eq!(spec.table_name, "storage_device_type");
        assert_eq!(spec.key_fields, STORAGE_DEVICE_TYPE_KEY);
    }
}
