//! Validation mode and path context shared by every validator
//!
//! Copyright (c) 2025 NFTMeta Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation mode threaded through a whole parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Standard-mandated fields must be present and well-typed; unknown keys are rejected
    Strict,
    /// Every field is optional but must be well-typed when present; unknown keys are ignored
    #[default]
    Lenient,
}

impl ValidationMode {
    /// Map the boolean strictness flag onto a mode
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Lenient => write!(f, "lenient"),
        }
    }
}

/// Position in the document being validated, plus the mode in effect
///
/// Contexts are cheap to derive: every nested object or array element gets
/// a child context carrying the same mode and an extended JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
    /// Validation mode
    pub mode: ValidationMode,
}

impl ValidationContext {
    /// Create a root context
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            path: "$".to_string(),
            mode,
        }
    }

    /// Create a child context with updated path
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
            mode: self.mode,
        }
    }

    /// Create a child context for array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            mode: self.mode,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode.is_strict()
    }
}
