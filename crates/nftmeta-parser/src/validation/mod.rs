//! Generic field-validation engine
//!
//! The engine knows nothing about CHIP-0007. It provides:
//!
//! - **base**: validation mode and JSON path context
//! - **error**: the validation error taxonomy and its stable tags
//! - **fields**: primitive validators (string, integer, boolean, enum, array)
//! - **variant**: ordered probing for fields that accept several JSON types
//! - **shape**: declarative object shapes with required/unknown key checks
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod fields;
pub mod shape;
pub mod variant;

// Re-export commonly used types
pub use base::{ValidationContext, ValidationMode};
pub use error::{ErrorKind, ErrorTag, ValidationError, ValidationResult};
pub use fields::{ElementKind, EnumValue, FieldRule};
pub use shape::ObjectShape;
pub use variant::{first_accepted, string_or_integer, try_variant, Attempt, Probe};
