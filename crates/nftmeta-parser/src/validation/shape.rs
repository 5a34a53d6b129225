//! Declarative object shapes and their structural checks
//!
//! A shape lists the keys an object must carry and the keys it may carry.
//! Before any field is validated, [`ObjectShape::check`] runs two passes:
//! every required key must be present (both modes), and in strict mode every
//! present key must be declared.
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::ValidationContext;
use crate::validation::error::{ErrorTag, ValidationError, ValidationResult};
use serde_json::{Map, Value};
use tracing::debug;

/// Key-level description of one object shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectShape {
    /// Name used in diagnostics
    pub name: &'static str,
    /// Keys that must be present, whatever their value
    pub required: &'static [&'static str],
    /// Keys that may be present
    pub optional: &'static [&'static str],
    /// Tag for missing/unknown property failures
    pub tag: ErrorTag,
}

impl ObjectShape {
    /// Whether `key` is declared by this shape
    pub fn allows(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }

    /// Run the required-key and unknown-key passes over `object`
    ///
    /// Presence is a key check only: `{"value": null}` has a `value`.
    pub fn check(&self, object: &Map<String, Value>, ctx: &ValidationContext) -> ValidationResult<()> {
        if let Some(missing) = self.required.iter().find(|key| !object.contains_key(**key)) {
            return Err(ValidationError::missing_property(missing, self.tag, &ctx.path));
        }

        for (key, value) in object {
            if self.allows(key) {
                continue;
            }
            if ctx.is_strict() {
                return Err(ValidationError::invalid_property(key, value, self.tag, &ctx.path));
            }
            debug!(shape = self.name, path = %ctx.path, key = %key, "ignoring unknown property");
        }

        Ok(())
    }
}
