//! Format dispatch and the parsing entry points
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::chip7::Chip7Parser;
use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::types::{Format, Metadata};
use crate::validation::ValidationMode;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A parser for one metadata format
pub trait MetadataParser: Send + Sync {
    /// The format this parser implements
    fn format(&self) -> Format;

    /// The validation mode this parser runs in
    fn mode(&self) -> ValidationMode;

    /// Validate an already-decoded document
    fn parse_value(&self, raw: &Value) -> Result<Metadata>;

    /// Decode JSON text and validate it
    ///
    /// Malformed text fails with [`Error::Json`], never with a validation error.
    fn parse_str(&self, json: &str) -> Result<Metadata> {
        debug!(format = %self.format(), mode = %self.mode(), bytes = json.len(), "parsing metadata");
        let raw: Value = serde_json::from_str(json)?;
        let metadata = self.parse_value(&raw)?;
        debug!(format = %self.format(), name = %metadata.name, "metadata parsed");
        Ok(metadata)
    }
}

/// Select the parser for `format`
pub fn parser_for(format: Format, mode: ValidationMode) -> Result<Box<dyn MetadataParser>> {
    match format {
        Format::Chip0007 => Ok(Box::new(Chip7Parser::new(mode))),
        unsupported => Err(Error::UnsupportedFormat { format: unsupported }),
    }
}

/// Parse a JSON metadata document
///
/// The format is checked before the text is decoded.
///
/// # Examples
///
/// ```rust
/// use nftmeta_parser::{parse_metadata, Format};
///
/// let metadata = parse_metadata(
///     r#"{"format": "CHIP-0007", "name": "N", "description": "D"}"#,
///     false,
///     Format::Chip0007,
/// ).unwrap();
/// assert_eq!(metadata.name, "N");
/// assert!(metadata.attributes.is_none());
/// ```
pub fn parse_metadata(json: &str, strict: bool, format: Format) -> Result<Metadata> {
    parser_for(format, ValidationMode::from_strict(strict))?.parse_str(json)
}

/// Configured parser
pub struct Parser {
    config: ParserConfig,
    inner: Box<dyn MetadataParser>,
}

impl Parser {
    /// Build a parser for `config`, failing if its format is unsupported
    pub fn new(config: ParserConfig) -> Result<Self> {
        let inner = parser_for(config.format, config.mode)?;
        Ok(Self { config, inner })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decode and validate JSON text
    pub fn parse(&self, json: &str) -> Result<Metadata> {
        self.inner.parse_str(json)
    }

    /// Validate an already-decoded document
    pub fn parse_value(&self, raw: &Value) -> Result<Metadata> {
        self.inner.parse_value(raw)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").field("config", &self.config).finish()
    }
}
