//! The subset of condition expressions the in-memory store understands.

use std::collections::BTreeMap;

use thiserror::Error;

use partstore_core::storage::Item;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Unsupported condition expression: {0}")]
    Unsupported(String),
    #[error("An expression attribute name used in the document path is not defined; attribute name: {0}")]
    UndefinedName(String),
}

/// A parsed `attribute_exists` / `attribute_not_exists` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    AttributeExists(String),
    AttributeNotExists(String),
}

impl Condition {
    /// Parses `expression`, resolving `#name` placeholders through `names`.
    pub fn parse(
        expression: &str,
        names: Option<&BTreeMap<String, String>>,
    ) -> Result<Self, ConditionError> {
        let unsupported = || ConditionError::Unsupported(expression.to_string());

        let (function, rest) = expression.trim().split_once('(').ok_or_else(unsupported)?;
        let argument = rest.strip_suffix(')').ok_or_else(unsupported)?.trim();

        if argument.is_empty() || argument.contains(|c: char| c.is_whitespace() || "(),".contains(c))
        {
            return Err(unsupported());
        }

        let attribute = if argument.starts_with('#') {
            names
                .and_then(|names| names.get(argument))
                .cloned()
                .ok_or_else(|| ConditionError::UndefinedName(argument.to_string()))?
        } else {
            argument.to_string()
        };

        match function.trim() {
            "attribute_exists" => Ok(Condition::AttributeExists(attribute)),
            "attribute_not_exists" => Ok(Condition::AttributeNotExists(attribute)),
            _ => Err(unsupported()),
        }
    }

    /// Evaluates the condition against the item currently stored at the key.
    pub fn holds(&self, existing: Option<&Item>) -> bool {
        let has = |attribute: &str| existing.is_some_and(|item| item.contains_key(attribute));

        match self {
            Condition::AttributeExists(attribute) => has(attribute),
            Condition::AttributeNotExists(attribute) => !has(attribute),
        }
    }
}
