//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between plain JSON items and DynamoDB
//! AttributeValue maps. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use partstore_core::storage::{Item, StoreError};
use serde_json::{Number, Value};

/// Convert a JSON item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    item.iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert a JSON value to an AttributeValue.
///
/// Strings, numbers, booleans, null, arrays and objects map to S, N, BOOL,
/// NULL, L and M.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(object) => AttributeValue::M(item_to_attributes(object)),
    }
}

/// Convert a DynamoDB item to a JSON item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_value(value)?)))
        .collect()
}

/// Convert an AttributeValue to a JSON value.
///
/// Sets come back as arrays; binary values as base64 strings.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_item(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(blob) => Ok(blob_to_value(blob)),
        AttributeValue::Bs(blobs) => Ok(Value::Array(blobs.iter().map(blob_to_value).collect())),
        other => Err(StoreError::Serialization(format!(
            "Unsupported attribute value: {other:?}"
        ))),
    }
}

fn parse_number(n: &str) -> Result<Value, StoreError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::from(u));
    }

    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| StoreError::Serialization(format!("Invalid number attribute: {n}")))
}

fn blob_to_value(blob: &Blob) -> Value {
    Value::String(STANDARD.encode(blob.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Item {
        match value {
            Value::Object(object) => object,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_storage_device_type_round_trip() {
        let item = object(json!({
            "storage_device_type_id": "123456",
            "name": "3x10",
            "model_uri": "test.step",
            "length": 60,
            "width": 60.5,
            "height": 160,
            "unit_type": "cm",
            "tags": ["a", 1, true, null],
            "dimensions": { "depth": 3 }
        }));

        let attributes = item_to_attributes(&item);
        assert_eq!(attributes_to_item(&attributes).unwrap(), item);
    }

    #[test]
    fn test_value_to_attribute_types() {
        assert_eq!(
            value_to_attribute(&json!("123456")),
            AttributeValue::S("123456".to_string())
        );
        assert_eq!(
            value_to_attribute(&json!(160)),
            AttributeValue::N("160".to_string())
        );
        assert_eq!(value_to_attribute(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(value_to_attribute(&Value::Null), AttributeValue::Null(true));
    }

    #[test]
    fn test_sets_become_arrays() {
        assert_eq!(
            attribute_to_value(&AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]))
                .unwrap(),
            json!(["a", "b"])
        );
        assert_eq!(
            attribute_to_value(&AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]))
                .unwrap(),
            json!([1, 2.5])
        );
    }

    #[test]
    fn test_binary_becomes_base64() {
        let blob = Blob::new(b"step".to_vec());
        assert_eq!(
            attribute_to_value(&AttributeValue::B(blob)).unwrap(),
            json!("c3RlcA==")
        );
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            attribute_to_value(&AttributeValue::N("not-a-number".to_string())),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_large_unsigned_number() {
        assert_eq!(
            attribute_to_value(&AttributeValue::N("18446744073709551615".to_string())).unwrap(),
            json!(u64::MAX)
        );
    }
}
