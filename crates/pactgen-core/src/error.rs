//! Error handling for the pactgen library.
//!
//! Building and serializing a [`Generator`](crate::Generator) never fails.
//! This error type only covers the surfaces around it: loading generator
//! sets and configuration from disk, and parsing kind or format names.
//!
//! # Examples
//!
//! ```
//! use pactgen_core::error::{Error, Result};
//! use pactgen_core::GeneratorKind;
//!
//! fn parse_kind(tag: &str) -> Result<GeneratorKind> {
//!     tag.parse()
//! }
//!
//! assert!(parse_kind("RandomInt").is_ok());
//! assert!(matches!(parse_kind("randomint"), Err(Error::UnknownKind(_))));
//! ```

use thiserror::Error;

/// Result type for pactgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pactgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generator type tag not in the known set
    #[error("Unknown generator type: {0}")]
    UnknownKind(String),

    /// UUID format name not in the known set
    #[error("Unknown UUID format: {0}")]
    UnknownUuidFormat(String),

    /// Spec version name not recognised
    #[error("Unknown spec version: {0}")]
    UnknownSpecVersion(String),

    /// Generator set document could not be read
    #[error("Generator document error: {0}")]
    Document(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new generator document error
    pub fn document<S: Into<String>>(msg: S) -> Self {
        Self::Document(msg.into())
    }
}
