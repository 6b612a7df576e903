//! Constructors for every generator kind.
//!
//! These are plain functions over the [`Generator`] variants. They never fail
//! and never inspect their arguments: a malformed regex or date pattern is
//! carried through as-is and only rejected, if at all, by the contract engine
//! when the contract is replayed.
//!
//! # Examples
//!
//! ```
//! use pactgen_core::builders::{date, random_boolean, uuid};
//! use pactgen_core::UuidFormat;
//! use serde_json::json;
//!
//! assert_eq!(
//!     date("yyyy-MM-dd").to_json(),
//!     json!({"pact:generator:type": "Date", "format": "yyyy-MM-dd"})
//! );
//! assert_eq!(
//!     uuid(Some(UuidFormat::Simple)).to_json(),
//!     json!({"pact:generator:type": "Uuid", "format": "simple"})
//! );
//! assert_eq!(
//!     random_boolean().to_json(),
//!     json!({"pact:generator:type": "RandomBoolean"})
//! );
//! ```

use crate::generators::{Generator, UuidFormat};

/// Random integer between `min` and `max`
pub fn random_int(min: Option<i64>, max: Option<i64>) -> Generator {
    Generator::RandomInt { min, max }
}

/// Random decimal with `digits` digits
pub fn random_decimal(digits: Option<i64>) -> Generator {
    Generator::RandomDecimal { digits }
}

/// Random hexadecimal string with `digits` digits
pub fn random_hexadecimal(digits: Option<i64>) -> Generator {
    Generator::RandomHexadecimal { digits }
}

/// Random string of `size` characters
pub fn random_string(size: Option<i64>) -> Generator {
    Generator::RandomString { size }
}

/// String matching `regex`
pub fn regex(regex: impl Into<String>) -> Generator {
    Generator::Regex {
        regex: regex.into(),
    }
}

/// Random UUID, rendered in `format` when given.
///
/// A `format` is only understood by V4 contracts.
pub fn uuid(format: Option<UuidFormat>) -> Generator {
    Generator::Uuid { format }
}

/// Date rendered with a pattern in Java `SimpleDateFormat` syntax
pub fn date(format: impl Into<String>) -> Generator {
    Generator::Date {
        format: format.into(),
    }
}

/// Time rendered with a pattern in Java `SimpleDateFormat` syntax
pub fn time(format: impl Into<String>) -> Generator {
    Generator::Time {
        format: format.into(),
    }
}

/// Date-time rendered with a pattern in Java `SimpleDateFormat` syntax
pub fn date_time(format: impl Into<String>) -> Generator {
    Generator::DateTime {
        format: format.into(),
    }
}

/// Random boolean
pub fn random_boolean() -> Generator {
    Generator::RandomBoolean
}

/// Value looked up from the provider state context with `expression`
pub fn provider_state(expression: Option<&str>) -> Generator {
    Generator::ProviderState {
        expression: expression.map(str::to_owned),
    }
}

/// URL with the mock server as its base.
///
/// `regex` matches the path portion to keep; `example` is a sample URL.
pub fn mock_server_url(regex: Option<&str>, example: Option<&str>) -> Generator {
    Generator::MockServerUrl {
        regex: regex.map(str::to_owned),
        example: example.map(str::to_owned),
    }
}
