//! Parser configuration
//!
//! A [`ParserConfig`] selects the validation mode and the metadata format to
//! parse. It can be built in code or loaded from YAML/JSON:
//!
//! ```yaml
//! mode: strict
//! format: CHIP-0007
//! ```

use crate::error::{Error, Result};
use crate::types::Format;
use crate::validation::ValidationMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Validation mode to use
    pub mode: ValidationMode,
    /// Metadata format to parse documents as
    pub format: Format,
}

impl ParserConfig {
    /// Create a configuration for strict validation
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::default()
        }
    }

    /// Create a configuration for lenient validation
    pub fn lenient() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Load configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Configuration {
            message: format!("Failed to parse YAML configuration: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Load configuration from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Configuration {
            message: format!("Failed to parse JSON configuration: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Load configuration from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            source: e,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }
}
