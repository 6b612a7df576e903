//! Generator type tags and the contract spec versions that define them.
//!
//! # Examples
//!
//! ```
//! use pactgen_core::{GeneratorKind, SpecVersion};
//!
//! let kind: GeneratorKind = "MockServerURL".parse().unwrap();
//! assert_eq!(kind, GeneratorKind::MockServerUrl);
//! assert_eq!(kind.as_str(), "MockServerURL");
//! assert_eq!(kind.spec_version(), SpecVersion::V4);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};

/// Revision of the contract specification a document targets.
///
/// Ordered, so `V3 < V4`. Deserializes through [`FromStr`], so config
/// files accept the same spellings as the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
pub enum SpecVersion {
    V3,
    #[default]
    V4,
}

impl SpecVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V3 => "V3",
            Self::V4 => "V4",
        }
    }
}

impl FromStr for SpecVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v3" | "3" => Ok(Self::V3),
            "v4" | "4" => Ok(Self::V4),
            _ => Err(Error::UnknownSpecVersion(s.to_string())),
        }
    }
}

impl TryFrom<String> for SpecVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `pact:generator:type` tag of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    RandomInt,
    RandomDecimal,
    RandomHexadecimal,
    RandomString,
    Regex,
    Uuid,
    Date,
    Time,
    DateTime,
    RandomBoolean,
    ProviderState,
    #[serde(rename = "MockServerURL")]
    MockServerUrl,
}

impl FromStr for GeneratorKind {
    type Err = Error;

    /// Tags are matched exactly; the external engine is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

impl GeneratorKind {
    /// Returns the wire tag as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RandomInt => "RandomInt",
            Self::RandomDecimal => "RandomDecimal",
            Self::RandomHexadecimal => "RandomHexadecimal",
            Self::RandomString => "RandomString",
            Self::Regex => "Regex",
            Self::Uuid => "Uuid",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::RandomBoolean => "RandomBoolean",
            Self::ProviderState => "ProviderState",
            Self::MockServerUrl => "MockServerURL",
        }
    }

    /// Lowest spec version that defines this kind
    pub fn spec_version(&self) -> SpecVersion {
        match self {
            Self::ProviderState | Self::MockServerUrl => SpecVersion::V4,
            _ => SpecVersion::V3,
        }
    }

    /// Returns an iterator over all generator kinds, V3 kinds first
    pub fn all() -> impl Iterator<Item = Self> {
        use GeneratorKind::*;
        [
            RandomInt,
            RandomDecimal,
            RandomHexadecimal,
            RandomString,
            Regex,
            Uuid,
            Date,
            Time,
            DateTime,
            RandomBoolean,
            ProviderState,
            MockServerUrl,
        ]
        .iter()
        .copied()
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
