//! Generator descriptors and their wire form.
//!
//! A [`Generator`] tells the contract engine how to produce a value when an
//! interaction is replayed. Each variant carries exactly the parameters its
//! kind accepts. On the wire a generator is a flat JSON object:
//!
//! ```text
//! { "pact:generator:type": "<Kind>", <param>: <value>, ... }
//! ```
//!
//! Absent parameters are left out entirely. Regex and format strings are
//! passed through untouched; the engine validates them when it runs.
//!
//! # Examples
//!
//! ```
//! use pactgen_core::builders;
//! use serde_json::json;
//!
//! let generator = builders::random_int(Some(1), Some(10));
//! assert_eq!(
//!     generator.to_json(),
//!     json!({"pact:generator:type": "RandomInt", "min": 1, "max": 10})
//! );
//! ```

pub mod kind;
pub mod uuid_format;

// External imports (alphabetized)
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

pub use kind::{GeneratorKind, SpecVersion};
pub use uuid_format::UuidFormat;

/// Key holding the generator type tag in a wire fragment
pub const GENERATOR_TYPE_KEY: &str = "pact:generator:type";

/// Key holding an inline example value next to a generator
pub const EXAMPLE_VALUE_KEY: &str = "value";

/// A dynamic value specification, one variant per generator kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(tag = "pact:generator:type")]
pub enum Generator {
    /// Random integer, optionally bounded
    RandomInt {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    /// Random decimal with the given number of digits
    RandomDecimal {
        #[serde(default)]
        digits: Option<i64>,
    },
    /// Random hexadecimal string with the given number of digits
    RandomHexadecimal {
        #[serde(default)]
        digits: Option<i64>,
    },
    /// Random string of the given size
    RandomString {
        #[serde(default)]
        size: Option<i64>,
    },
    /// String matching a regular expression
    Regex { regex: String },
    /// Random UUID
    Uuid {
        #[serde(default)]
        format: Option<UuidFormat>,
    },
    /// Date formatted with a date pattern such as `yyyy-MM-dd`
    Date { format: String },
    /// Time formatted with a time pattern such as `HH:mm:ss`
    Time { format: String },
    /// Timestamp formatted with a date-time pattern
    DateTime { format: String },
    /// Random `true` or `false`, no parameters
    RandomBoolean,
    /// Value looked up from the provider state by an expression
    ProviderState {
        #[serde(default)]
        expression: Option<String>,
    },
    /// URL rooted at the mock server's base address
    #[serde(rename = "MockServerURL")]
    MockServerUrl {
        #[serde(default)]
        regex: Option<String>,
        #[serde(default)]
        example: Option<String>,
    },
}

impl Generator {
    /// The type tag of this generator
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Self::RandomInt { .. } => GeneratorKind::RandomInt,
            Self::RandomDecimal { .. } => GeneratorKind::RandomDecimal,
            Self::RandomHexadecimal { .. } => GeneratorKind::RandomHexadecimal,
            Self::RandomString { .. } => GeneratorKind::RandomString,
            Self::Regex { .. } => GeneratorKind::Regex,
            Self::Uuid { .. } => GeneratorKind::Uuid,
            Self::Date { .. } => GeneratorKind::Date,
            Self::Time { .. } => GeneratorKind::Time,
            Self::DateTime { .. } => GeneratorKind::DateTime,
            Self::RandomBoolean => GeneratorKind::RandomBoolean,
            Self::ProviderState { .. } => GeneratorKind::ProviderState,
            Self::MockServerUrl { .. } => GeneratorKind::MockServerUrl,
        }
    }

    /// Lowest spec version able to carry this generator as built.
    ///
    /// The `format` parameter of `Uuid` only exists from V4 onwards.
    pub fn spec_version(&self) -> SpecVersion {
        match self {
            Self::Uuid { format: Some(_) } => SpecVersion::V4,
            _ => self.kind().spec_version(),
        }
    }

    /// Whether a document targeting `version` can carry this generator
    pub fn is_supported_by(&self, version: SpecVersion) -> bool {
        version >= self.spec_version()
    }

    /// Present parameters in declaration order, already converted to JSON
    pub fn parameters(&self) -> Vec<(&'static str, JsonValue)> {
        let params: Vec<(&'static str, Option<JsonValue>)> = match self {
            Self::RandomInt { min, max } => vec![
                ("min", min.map(JsonValue::from)),
                ("max", max.map(JsonValue::from)),
            ],
            Self::RandomDecimal { digits } | Self::RandomHexadecimal { digits } => {
                vec![("digits", digits.map(JsonValue::from))]
            }
            Self::RandomString { size } => vec![("size", size.map(JsonValue::from))],
            Self::Regex { regex } => vec![("regex", Some(JsonValue::from(regex.as_str())))],
            Self::Uuid { format } => {
                vec![("format", format.map(|f| JsonValue::from(f.as_str())))]
            }
            Self::Date { format } | Self::Time { format } | Self::DateTime { format } => {
                vec![("format", Some(JsonValue::from(format.as_str())))]
            }
            Self::RandomBoolean => Vec::new(),
            Self::ProviderState { expression } => {
                vec![("expression", expression.as_deref().map(JsonValue::from))]
            }
            Self::MockServerUrl { regex, example } => vec![
                ("regex", regex.as_deref().map(JsonValue::from)),
                ("example", example.as_deref().map(JsonValue::from)),
            ],
        };

        params
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect()
    }

    /// Serialize to the wire fragment
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        self.merge_into(&mut map);
        JsonValue::Object(map)
    }

    /// Layer the fragment keys onto an existing object, such as a matcher
    /// definition.
    ///
    /// Generator keys win: a key already in `target` with the same name is
    /// overwritten. Merging a `Regex` or `MockServerURL` generator into a
    /// regex matcher replaces the matcher's own `regex`.
    pub fn merge_into(&self, target: &mut Map<String, JsonValue>) {
        target.insert(
            GENERATOR_TYPE_KEY.to_string(),
            JsonValue::from(self.kind().as_str()),
        );
        for (name, value) in self.parameters() {
            target.insert(name.to_string(), value);
        }
    }

    /// The fragment with an inline example value under `"value"`
    pub fn with_example(&self, example: impl Into<JsonValue>) -> JsonValue {
        let mut map = Map::new();
        map.insert(EXAMPLE_VALUE_KEY.to_string(), example.into());
        self.merge_into(&mut map);
        JsonValue::Object(map)
    }
}

impl Serialize for Generator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params = self.parameters();
        let mut map = serializer.serialize_map(Some(params.len() + 1))?;
        map.serialize_entry(GENERATOR_TYPE_KEY, self.kind().as_str())?;
        for (name, value) in &params {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl From<Generator> for JsonValue {
    fn from(generator: Generator) -> Self {
        generator.to_json()
    }
}

impl From<&Generator> for JsonValue {
    fn from(generator: &Generator) -> Self {
        generator.to_json()
    }
}
