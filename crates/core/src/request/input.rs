use std::collections::BTreeMap;

use serde_json::Value;

use super::{RequestError, Result};
use crate::storage::{Item, PutItemRequest};

const TABLE_NAME_FIELD: &str = "TableName";
const ITEM_FIELD: &str = "Item";
const CONDITION_EXPRESSION_FIELD: &str = "ConditionExpression";
const ATTRIBUTE_NAMES_FIELD: &str = "ExpressionAttributeNames";
const ATTRIBUTE_VALUES_FIELD: &str = "ExpressionAttributeValues";

/// Builds the put input for `table_name` from a resolved payload.
///
/// Two forms are accepted:
///
/// - `{ "TableName": ..., "Item": { ... } }`, optionally with
///   `ConditionExpression`, `ExpressionAttributeNames` and
///   `ExpressionAttributeValues`.
/// - The item's fields directly, `{ ... }`.
///
/// Item fields are never inspected; the store enforces its own schema.
pub fn put_item_request(mut object: Item, table_name: &str) -> Result<PutItemRequest> {
    if let Some(requested) = object.remove(TABLE_NAME_FIELD) {
        let Value::String(requested) = requested else {
            return Err(RequestError::InvalidField {
                field: TABLE_NAME_FIELD,
                expected: "a string",
            });
        };
        if requested != table_name {
            return Err(RequestError::TableMismatch {
                requested,
                expected: table_name.to_string(),
            });
        }
    }

    let item = match object.remove(ITEM_FIELD) {
        None => return Ok(PutItemRequest::new(table_name, object)),
        Some(Value::Object(item)) => item,
        Some(_) => {
            return Err(RequestError::InvalidField {
                field: ITEM_FIELD,
                expected: "an object",
            })
        }
    };

    let mut request = PutItemRequest::new(table_name, item);

    for (name, value) in object {
        match name.as_str() {
            CONDITION_EXPRESSION_FIELD => {
                let Value::String(expression) = value else {
                    return Err(RequestError::InvalidField {
                        field: CONDITION_EXPRESSION_FIELD,
                        expected: "a string",
                    });
                };
                request.condition_expression = Some(expression);
            }
            ATTRIBUTE_NAMES_FIELD => {
                request.expression_attribute_names = Some(attribute_names(value)?);
            }
            ATTRIBUTE_VALUES_FIELD => {
                let Value::Object(values) = value else {
                    return Err(RequestError::InvalidField {
                        field: ATTRIBUTE_VALUES_FIELD,
                        expected: "an object",
                    });
                };
                request.expression_attribute_values = Some(values);
            }
            _ => return Err(RequestError::UnsupportedParameter(name)),
        }
    }

    Ok(request)
}

fn attribute_names(value: Value) -> Result<BTreeMap<String, String>> {
    let invalid = || RequestError::InvalidField {
        field: ATTRIBUTE_NAMES_FIELD,
        expected: "an object of strings",
    };

    let Value::Object(names) = value else {
        return Err(invalid());
    };

    names
        .into_iter()
        .map(|(alias, name)| match name {
            Value::String(name) => Ok((alias, name)),
            _ => Err(invalid()),
        })
        .collect()
}

/// Extracts exactly `key_fields` from a resolved payload.
///
/// Every other field is ignored. Key values must be strings or numbers.
pub fn key_from_object(object: &Item, key_fields: &[&str]) -> Result<Item> {
    key_fields
        .iter()
        .map(|field| match object.get(*field) {
            None => Err(RequestError::MissingKey {
                field: field.to_string(),
            }),
            Some(value @ (Value::String(_) | Value::Number(_))) => {
                Ok((field.to_string(), value.clone()))
            }
            Some(_) => Err(RequestError::InvalidKey {
                field: field.to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{COMPONENT_TYPE_KEY, STORAGE_DEVICE_INSTANCE_KEY, STORAGE_DEVICE_TYPE_KEY};
    use serde_json::json;

    fn object(value: Value) -> Item {
        match value {
            Value::Object(object) => object,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_put_with_table_name_and_item() {
        let request = put_item_request(
            object(json!({
                "TableName": "storage_device_type",
                "Item": {
                    "storage_device_type_id": "123456",
                    "name": "3x10",
                    "model_uri": "test.step",
                    "length": 60,
                    "width": 60,
                    "height": 160,
                    "unit_type": "cm"
                }
            })),
            "storage_device_type",
        )
        .unwrap();

        assert_eq!(request.table_name, "storage_device_type");
        assert_eq!(request.item["storage_device_type_id"], "123456");
        assert_eq!(request.item["height"], 160);
        assert_eq!(request.item.len(), 7);
        assert_eq!(request.condition_expression, None);
    }

    #[test]
    fn test_put_simplified_form_is_the_item() {
        let fields = object(json!({ "component_type_id": "1", "name": "component1" }));
        let request = put_item_request(fields.clone(), "component_type").unwrap();

        assert_eq!(request, PutItemRequest::new("component_type", fields));
    }

    #[test]
    fn test_put_rejects_other_table() {
        let result = put_item_request(
            object(json!({ "TableName": "component_type", "Item": {} })),
            "storage_device_type",
        );

        assert_eq!(
            result,
            Err(RequestError::TableMismatch {
                requested: "component_type".to_string(),
                expected: "storage_device_type".to_string(),
            })
        );
    }

    #[test]
    fn test_put_item_must_be_object() {
        let result = put_item_request(object(json!({ "Item": "nope" })), "component_type");
        assert_eq!(
            result,
            Err(RequestError::InvalidField {
                field: "Item",
                expected: "an object",
            })
        );
    }

    #[test]
    fn test_put_condition_parameters() {
        let request = put_item_request(
            object(json!({
                "Item": { "component_type_id": "1" },
                "ConditionExpression": "attribute_not_exists(#id)",
                "ExpressionAttributeNames": { "#id": "component_type_id" },
                "ExpressionAttributeValues": { ":v": "1" }
            })),
            "component_type",
        )
        .unwrap();

        assert_eq!(
            request.condition_expression.as_deref(),
            Some("attribute_not_exists(#id)")
        );
        assert_eq!(
            request.expression_attribute_names.unwrap()["#id"],
            "component_type_id"
        );
        assert_eq!(request.expression_attribute_values.unwrap()[":v"], "1");
    }

    #[test]
    fn test_put_rejects_unknown_parameters() {
        let result = put_item_request(
            object(json!({ "Item": {}, "ReturnValues": "ALL_OLD" })),
            "component_type",
        );
        assert_eq!(
            result,
            Err(RequestError::UnsupportedParameter("ReturnValues".to_string()))
        );
    }

    #[test]
    fn test_key_single_field_ignores_others() {
        let key = key_from_object(
            &object(json!({ "storage_device_type_id": "123456", "name": "3x10" })),
            STORAGE_DEVICE_TYPE_KEY,
        )
        .unwrap();

        assert_eq!(key, object(json!({ "storage_device_type_id": "123456" })));
    }

    #[test]
    fn test_key_composite() {
        let key = key_from_object(
            &object(json!({
                "storage_device_instance_id": "1",
                "storage_device_type_id": "123456",
                "version": "1"
            })),
            STORAGE_DEVICE_INSTANCE_KEY,
        )
        .unwrap();

        assert_eq!(
            key,
            object(json!({
                "storage_device_instance_id": "1",
                "storage_device_type_id": "123456"
            }))
        );
    }

    #[test]
    fn test_key_missing_field() {
        let result = key_from_object(
            &object(json!({ "storage_device_instance_id": "1" })),
            STORAGE_DEVICE_INSTANCE_KEY,
        );
        assert_eq!(
            result,
            Err(RequestError::MissingKey {
                field: "storage_device_type_id".to_string()
            })
        );
    }

    #[test]
    fn test_key_accepts_numbers() {
        let key = key_from_object(&object(json!({ "component_type_id": 7 })), COMPONENT_TYPE_KEY)
            .unwrap();
        assert_eq!(key["component_type_id"], 7);
    }

    #[test]
    fn test_key_rejects_structured_values() {
        let result = key_from_object(
            &object(json!({ "component_type_id": { "S": "1" } })),
            COMPONENT_TYPE_KEY,
        );
        assert_eq!(
            result,
            Err(RequestError::InvalidKey {
                field: "component_type_id".to_string()
            })
        );
    }
}
