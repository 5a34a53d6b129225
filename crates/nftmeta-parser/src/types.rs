//! Normalized metadata records produced by a successful parse
//!
//! Records serialize back to CHIP-0007 JSON: snake_case keys, absent
//! optional fields omitted.
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::validation::EnumValue;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Metadata standard identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Format {
    /// https://github.com/Chia-Network/chips/blob/main/CHIPs/chip-0007.md
    #[default]
    #[serde(rename = "CHIP-0007")]
    Chip0007,
    /// Reserved identifier; accepted in documents but not parseable
    #[serde(rename = "CHIP-0015")]
    Chip0015,
}

impl Format {
    /// Every known identifier, in declaration order
    pub const ALL: [Format; 2] = [Format::Chip0007, Format::Chip0015];
}

impl EnumValue for Format {
    fn as_str(&self) -> &'static str {
        match self {
            Format::Chip0007 => "CHIP-0007",
            Format::Chip0015 => "CHIP-0015",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that validated either as text or as an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrInteger {
    String(String),
    Integer(i64),
}

impl StringOrInteger {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StringOrInteger::String(s) => Some(s),
            StringOrInteger::Integer(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StringOrInteger::String(_) => None,
            StringOrInteger::Integer(i) => Some(*i),
        }
    }
}

impl From<&str> for StringOrInteger {
    fn from(value: &str) -> Self {
        StringOrInteger::String(value.to_string())
    }
}

impl From<i64> for StringOrInteger {
    fn from(value: i64) -> Self {
        StringOrInteger::Integer(value)
    }
}

/// Content warning: a flag, or the list of sensitive categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SensitiveContent {
    Flag(bool),
    Labels(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: StringOrInteger,
    pub value: StringOrInteger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAttribute {
    #[serde(rename = "type")]
    pub kind: StringOrInteger,
    pub value: StringOrInteger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<CollectionAttribute>>,
}

/// A validated, defaulted CHIP-0007 metadata record
///
/// `format`, `name` and `description` are always populated; in lenient mode
/// they fall back to the primary format and empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub format: Format,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minting_tool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_content: Option<SensitiveContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Collection>,
    /// Opaque payload, passed through unvalidated
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A present key is `Some`, even when its value is `null`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Metadata {
    /// A record holding only the always-present fields
    pub fn new(format: Format, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            format,
            name: name.into(),
            description: description.into(),
            minting_tool: None,
            sensitive_content: None,
            series_number: None,
            series_total: None,
            attributes: None,
            collection: None,
            data: None,
        }
    }
}
