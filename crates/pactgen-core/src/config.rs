//! Configuration for rendering generator fragments.
//!
//! The configuration can be created programmatically or loaded from a YAML
//! or TOML file. TOML is picked for files ending in `.toml`, YAML otherwise.
//!
//! # Examples
//!
//! ```no_run
//! use pactgen_core::config::{Config, OutputFormat};
//! use pactgen_core::SpecVersion;
//!
//! # #[tokio::main]
//! # async fn main() -> pactgen_core::Result<()> {
//! // Create a config programmatically
//! let mut config = Config::new(SpecVersion::V3);
//! config.output_format = OutputFormat::Yaml;
//!
//! // Or load one from disk
//! let config = Config::from_file("pactgen.toml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::generators::SpecVersion;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// How rendered fragments are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Configuration for generator rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Contract spec version the rendered fragments must fit
    #[serde(default)]
    pub spec_version: SpecVersion,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Output encoding
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(SpecVersion::default())
    }
}

impl Config {
    /// Create a new Config targeting `spec_version`, other fields defaulted
    pub fn new(spec_version: SpecVersion) -> Self {
        Self {
            spec_version,
            pretty: default_pretty(),
            output_format: OutputFormat::default(),
        }
    }

    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).await?;
        let parsed = if is_toml(path) {
            toml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| {
            crate::Error::config(format!(
                "Failed to parse configuration {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            toml::to_string(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn default_pretty() -> bool {
    true
}
