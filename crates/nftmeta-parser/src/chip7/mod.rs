//! CHIP-0007 document composers
//!
//! - `metadata`: top-level fields, `sensitive_content`, `attributes`
//! - `collection`: the `collection` object and its attributes
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

pub mod collection;
pub mod metadata;

use crate::error::Result;
use crate::parser::MetadataParser;
use crate::types::{Format, Metadata};
use crate::validation::{ValidationContext, ValidationMode};
use serde_json::Value;

/// Parser for CHIP-0007 metadata
///
/// Holds nothing but its mode, so one instance can serve any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chip7Parser {
    mode: ValidationMode,
}

impl Chip7Parser {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ValidationMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ValidationMode::Lenient)
    }
}

impl MetadataParser for Chip7Parser {
    fn format(&self) -> Format {
        Format::Chip0007
    }

    fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn parse_value(&self, raw: &Value) -> Result<Metadata> {
        metadata::compose_metadata(raw, &ValidationContext::new(self.mode))
    }
}
