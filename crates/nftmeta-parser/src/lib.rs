//! NFTMeta Parser - CHIP-0007 NFT metadata validation
//!
//! This crate validates untrusted JSON metadata documents against the
//! CHIP-0007 standard and normalizes them into a well-typed record, or fails
//! with a precise, tagged error.
//!
//! ## Quick Start
//!
//! ```rust
//! use nftmeta_parser::{parse_metadata, Format, SensitiveContent};
//!
//! let json = r#"{
//!     "format": "CHIP-0007",
//!     "name": "Pikachu",
//!     "description": "Electric-type Pokémon",
//!     "sensitive_content": "TRUE",
//!     "attributes": [{"trait_type": "Speed", "value": 90}]
//! }"#;
//!
//! let metadata = parse_metadata(json, false, Format::Chip0007).unwrap();
//! assert_eq!(metadata.sensitive_content, Some(SensitiveContent::Flag(true)));
//!
//! // Strict mode rejects the text flag
//! assert!(parse_metadata(json, true, Format::Chip0007).is_err());
//! ```
//!
//! ## Validation Modes
//!
//! - **Strict**: `format`, `name` and `description` must be present and
//!   non-empty; malformed fields fail with `missing-or-invalid`; unknown
//!   object keys are rejected
//! - **Lenient**: every field is optional but must be well-typed when
//!   present; unknown object keys are ignored
//!
//! In both modes an attribute must carry `trait_type` and `value`, and a
//! collection must carry `id` and `name`. Parsing stops at the first failure.
//!
//! ## Error Tags
//!
//! Every validation failure carries an [`ErrorTag`] with a stable code
//! (`parser0001` for `format` through `parser0018` for collection attribute
//! values, `parser0019` for the document root).
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

pub mod chip7;
pub mod config;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

// Re-export commonly used types for convenience
pub use chip7::Chip7Parser;
pub use config::ParserConfig;
pub use error::{Error, Result};
pub use parser::{parse_metadata, parser_for, MetadataParser, Parser};
pub use types::{
    Attribute, Collection, CollectionAttribute, Format, Metadata, SensitiveContent, StringOrInteger,
};
pub use validation::{ErrorKind, ErrorTag, ValidationError, ValidationMode};
