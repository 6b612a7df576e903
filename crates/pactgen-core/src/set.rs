//! Named collections of generators.
//!
//! A [`GeneratorSet`] maps a name (typically a JSON path or field name in the
//! interaction body) to a [`Generator`]. Sets are stored as YAML or JSON
//! documents in the wire form, one fragment per name:
//!
//! ```yaml
//! "$.id":
//!   "pact:generator:type": Uuid
//! "$.createdAt":
//!   "pact:generator:type": DateTime
//!   format: "yyyy-MM-dd'T'HH:mm:ss"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tokio::fs;

use crate::generators::{Generator, SpecVersion};
use crate::Error;

/// Generators keyed by name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorSet {
    generators: BTreeMap<String, Generator>,
}

impl GeneratorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the generator stored under `name`
    pub fn insert(&mut self, name: impl Into<String>, generator: Generator) -> Option<Generator> {
        self.generators.insert(name.into(), generator)
    }

    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.generators.get(name)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Generator)> {
        self.generators.iter().map(|(name, g)| (name.as_str(), g))
    }

    /// Highest spec version any member needs; V3 for an empty set
    pub fn minimum_spec_version(&self) -> SpecVersion {
        self.generators
            .values()
            .map(Generator::spec_version)
            .max()
            .unwrap_or(SpecVersion::V3)
    }

    /// Names of members that a `version` document cannot carry
    pub fn unsupported_by(&self, version: SpecVersion) -> Vec<&str> {
        self.iter()
            .filter(|(_, g)| !g.is_supported_by(version))
            .map(|(name, _)| name)
            .collect()
    }

    /// Render to a JSON object of name to wire fragment
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .iter()
            .map(|(name, g)| (name.to_string(), g.to_json()))
            .collect();
        JsonValue::Object(map)
    }

    /// Parse a document as JSON, falling back to YAML.
    ///
    /// Content that opens with `{` is reported with the JSON parser's error.
    pub fn parse(content: &str) -> crate::Result<Self> {
        match serde_json::from_str(content) {
            Ok(set) => Ok(set),
            Err(e) if content.trim_start().starts_with('{') => Err(e.into()),
            Err(_) => Ok(serde_yaml::from_str(content)?),
        }
    }

    /// Load a generator set, as JSON for `.json` files and YAML otherwise
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading generator set from {}", path.display());
        let content = fs::read_to_string(path).await?;
        let parsed: crate::Result<Self> = if is_json(path) {
            serde_json::from_str(&content).map_err(Error::from)
        } else {
            serde_yaml::from_str(&content).map_err(Error::from)
        };
        let set = parsed.map_err(|e| {
            Error::document(format!(
                "Invalid generator document at {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!("Loaded {} generators from {}", set.len(), path.display());
        Ok(set)
    }

    /// Save the set, as JSON for `.json` files and YAML otherwise
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

impl FromIterator<(String, Generator)> for GeneratorSet {
    fn from_iter<I: IntoIterator<Item = (String, Generator)>>(iter: I) -> Self {
        Self {
            generators: iter.into_iter().collect(),
        }
    }
}
