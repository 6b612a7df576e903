//! Output formats accepted by the `Uuid` generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Textual form of a generated UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UuidFormat {
    /// 32 lowercase hex digits, no hyphens
    #[serde(rename = "simple")]
    Simple,
    /// e.g. `936da01f-9abd-4d9d-80c7-02af85c822a8`
    #[serde(rename = "lower-case-hyphenated")]
    LowerCaseHyphenated,
    /// e.g. `936DA01F-9ABD-4D9D-80C7-02AF85C822A8`
    #[serde(rename = "upper-case-hyphenated")]
    UpperCaseHyphenated,
    /// e.g. `urn:uuid:936da01f-9abd-4d9d-80c7-02af85c822a8`
    #[serde(rename = "URN")]
    Urn,
}

impl UuidFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::LowerCaseHyphenated => "lower-case-hyphenated",
            Self::UpperCaseHyphenated => "upper-case-hyphenated",
            Self::Urn => "URN",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        use UuidFormat::*;
        [Simple, LowerCaseHyphenated, UpperCaseHyphenated, Urn]
            .iter()
            .copied()
    }
}

impl FromStr for UuidFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnknownUuidFormat(s.to_string()))
    }
}

impl fmt::Display for UuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_format_serde() {
        let json = serde_json::to_string(&UuidFormat::LowerCaseHyphenated).unwrap();
        assert_eq!(json, r#""lower-case-hyphenated""#);

        let format: UuidFormat = serde_json::from_str(r#""URN""#).unwrap();
        assert_eq!(format, UuidFormat::Urn);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("simple".parse::<UuidFormat>().unwrap(), UuidFormat::Simple);
        assert_eq!(
            "upper-case-hyphenated".parse::<UuidFormat>().unwrap(),
            UuidFormat::UpperCaseHyphenated
        );
        assert!(matches!(
            "urn".parse::<UuidFormat>(),
            Err(Error::UnknownUuidFormat(_))
        ));
    }
}
