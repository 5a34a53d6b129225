//! Error types for the NFTMeta parser
//!
//! Validation failures are domain errors and carry a tag; everything else
//! (malformed JSON, unsupported formats, configuration problems) is reported
//! through its own variant so callers can tell the two apart.

use crate::types::Format;
use crate::validation::{ErrorKind, ErrorTag, ValidationError};
use thiserror::Error;

/// Main error type for NFTMeta operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed JSON text
    #[error("JSON syntax error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A document failed validation
    #[error(transparent)]
    Validation(ValidationError),

    /// The requested parsing format has no parser
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: Format },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is a document validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Tag of a validation failure
    pub fn tag(&self) -> Option<ErrorTag> {
        self.as_validation().map(|err| err.tag)
    }

    /// Kind of a validation failure
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_validation().map(|err| err.kind)
    }
}

// Conversion implementations
impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
