//! Validation error types for CHIP-0007 metadata documents
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Stable, machine-readable tag identifying the field a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorTag {
    /// Required in strict mode, must be a known format when present
    #[serde(rename = "parser0001")]
    InvalidFormat,
    /// Required non-empty text in strict mode, text when present
    #[serde(rename = "parser0002")]
    InvalidName,
    /// Required non-empty text in strict mode, text when present
    #[serde(rename = "parser0003")]
    InvalidDescription,
    #[serde(rename = "parser0004")]
    InvalidMintingTool,
    /// Boolean or array of text when present
    #[serde(rename = "parser0005")]
    InvalidSensitiveContent,
    #[serde(rename = "parser0006")]
    InvalidSeriesNumber,
    #[serde(rename = "parser0007")]
    InvalidSeriesTotal,
    /// Array of attribute objects, and the structure of each attribute object
    #[serde(rename = "parser0008")]
    InvalidAttributes,
    #[serde(rename = "parser0009")]
    InvalidAttributeTraitType,
    #[serde(rename = "parser0010")]
    InvalidAttributeValue,
    #[serde(rename = "parser0011")]
    InvalidAttributeMinValue,
    #[serde(rename = "parser0012")]
    InvalidAttributeMaxValue,
    /// Shape of the collection field and structure of the collection object
    #[serde(rename = "parser0013")]
    InvalidCollection,
    #[serde(rename = "parser0014")]
    InvalidCollectionId,
    #[serde(rename = "parser0015")]
    InvalidCollectionName,
    /// Array of collection attribute objects, and the structure of each one
    #[serde(rename = "parser0016")]
    InvalidCollectionAttributes,
    #[serde(rename = "parser0017")]
    InvalidCollectionAttributeType,
    #[serde(rename = "parser0018")]
    InvalidCollectionAttributeValue,
    /// Document root: not a JSON object, or an undeclared top-level key in strict mode
    #[serde(rename = "parser0019")]
    InvalidMetadata,
}

impl ErrorTag {
    /// The stable code for this tag, e.g. `parser0001`
    pub fn code(&self) -> &'static str {
        match self {
            ErrorTag::InvalidFormat => "parser0001",
            ErrorTag::InvalidName => "parser0002",
            ErrorTag::InvalidDescription => "parser0003",
            ErrorTag::InvalidMintingTool => "parser0004",
            ErrorTag::InvalidSensitiveContent => "parser0005",
            ErrorTag::InvalidSeriesNumber => "parser0006",
            ErrorTag::InvalidSeriesTotal => "parser0007",
            ErrorTag::InvalidAttributes => "parser0008",
            ErrorTag::InvalidAttributeTraitType => "parser0009",
            ErrorTag::InvalidAttributeValue => "parser0010",
            ErrorTag::InvalidAttributeMinValue => "parser0011",
            ErrorTag::InvalidAttributeMaxValue => "parser0012",
            ErrorTag::InvalidCollection => "parser0013",
            ErrorTag::InvalidCollectionId => "parser0014",
            ErrorTag::InvalidCollectionName => "parser0015",
            ErrorTag::InvalidCollectionAttributes => "parser0016",
            ErrorTag::InvalidCollectionAttributeType => "parser0017",
            ErrorTag::InvalidCollectionAttributeValue => "parser0018",
            ErrorTag::InvalidMetadata => "parser0019",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Strict mode: a field is absent when required, or present with the wrong type/shape
    MissingOrInvalidField,
    /// A present field has the wrong type/shape or an unsupported value
    InvalidField,
    /// An object lacks a structurally required key
    MissingProperty,
    /// Strict mode: an object has a key outside its allowed set
    InvalidProperty,
}

/// A single validation failure, with the offending field and its raw value
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// What kind of failure this is
    pub kind: ErrorKind,
    /// Machine-readable tag for programmatic dispatch
    pub tag: ErrorTag,
    /// Field or property name the failure refers to
    pub name: String,
    /// Raw offending value, `None` when the field was absent
    pub value: Option<Value>,
    /// JSON path of the field, e.g. `$.attributes[0].value`
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.tag)
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_string(),
    }
}

impl ValidationError {
    fn build(
        kind: ErrorKind,
        tag: ErrorTag,
        name: &str,
        value: Option<&Value>,
        path: &str,
        message: String,
    ) -> Self {
        Self {
            kind,
            tag,
            name: name.to_string(),
            value: value.cloned(),
            path: path.to_string(),
            message,
        }
    }

    /// A field required in strict mode is absent, or is present but malformed
    pub fn missing_or_invalid_field(
        name: &str,
        value: Option<&Value>,
        tag: ErrorTag,
        path: &str,
    ) -> Self {
        let message = format!("Missing or invalid {}: {}", name, describe(value));
        Self::build(ErrorKind::MissingOrInvalidField, tag, name, value, path, message)
    }

    /// A present field is malformed
    pub fn invalid_field(name: &str, value: &Value, tag: ErrorTag, path: &str) -> Self {
        let message = format!("Invalid {}: {}", name, describe(Some(value)));
        Self::build(ErrorKind::InvalidField, tag, name, Some(value), path, message)
    }

    /// An object is missing a required key
    pub fn missing_property(name: &str, tag: ErrorTag, path: &str) -> Self {
        let message = format!("Missing property {}", name);
        Self::build(ErrorKind::MissingProperty, tag, name, None, path, message)
    }

    /// An object carries a key it does not declare
    pub fn invalid_property(name: &str, value: &Value, tag: ErrorTag, path: &str) -> Self {
        let message = format!("Invalid property {}", name);
        Self::build(ErrorKind::InvalidProperty, tag, name, Some(value), path, message)
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_appends_tag() {
        let err = ValidationError::missing_or_invalid_field("format", None, ErrorTag::InvalidFormat, "$.format");
        assert_eq!(err.to_string(), "Missing or invalid format: undefined [parser0001]");
        assert_eq!(err.kind, ErrorKind::MissingOrInvalidField);
        assert!(err.value.is_none());
    }

    #[test]
    fn test_invalid_field_keeps_raw_value() {
        let err = ValidationError::invalid_field("series_number", &json!(1.5), ErrorTag::InvalidSeriesNumber, "$.series_number");
        assert_eq!(err.to_string(), "Invalid series_number: 1.5 [parser0006]");
        assert_eq!(err.value, Some(json!(1.5)));
    }

    #[test]
    fn test_property_messages() {
        let missing = ValidationError::missing_property("value", ErrorTag::InvalidAttributes, "$.attributes[0]");
        assert_eq!(missing.to_string(), "Missing property value [parser0008]");

        let unknown = ValidationError::invalid_property("color", &json!("red"), ErrorTag::InvalidAttributes, "$.attributes[0]");
        assert_eq!(unknown.to_string(), "Invalid property color [parser0008]");
        assert_eq!(unknown.kind, ErrorKind::InvalidProperty);
    }

    #[test]
    fn test_tag_serializes_as_code() {
        assert_eq!(serde_json::to_value(ErrorTag::InvalidCollectionAttributeValue).unwrap(), json!("parser0018"));
        let tag: ErrorTag = serde_json::from_value(json!("parser0013")).unwrap();
        assert_eq!(tag, ErrorTag::InvalidCollection);
        assert_eq!(tag.code(), "parser0013");
    }
}
