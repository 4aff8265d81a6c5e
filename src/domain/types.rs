//! Value types that keep server text exactly as it was received.

use std::fmt::{self, Display, Write};

use chrono::{DateTime, Local, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::value::RawValue;

/// Decimal amount rendered byte-for-byte as the server sent it.
///
/// The API may encode decimals either as JSON strings (`"12.50"`) or as
/// number literals (`12.50`). Both are kept as the literal text so that
/// trailing zeros survive; going through `f64` would turn `12.50` into
/// `12.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<RawValue> = Box::deserialize(deserializer)?;
        let text = raw.get();
        if text.starts_with('"') {
            let value: String = serde_json::from_str(text).map_err(de::Error::custom)?;
            Ok(Self(value))
        } else {
            Ok(Self(text.to_string()))
        }
    }
}

/// Server timestamp, kept verbatim and only formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the timestamp in local time using a `chrono` format string.
    ///
    /// Timestamps carrying an offset are converted to the local zone.
    /// Naive timestamps are taken to already be local. Anything that fails to
    /// parse, or a format string `chrono` cannot render, yields the original
    /// text.
    pub fn localized(&self, format: &str) -> String {
        if let Ok(value) = DateTime::parse_from_rfc3339(&self.0) {
            return self.render(value.with_timezone(&Local).format(format));
        }
        if let Ok(value) = self.0.parse::<NaiveDateTime>() {
            return self.render(value.format(format));
        }
        self.0.clone()
    }

    fn render(&self, formatted: impl Display) -> String {
        let mut out = String::new();
        if write!(out, "{formatted}").is_err() {
            return self.0.clone();
        }
        out
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        amount: Amount,
    }

    #[test]
    fn keeps_string_decimals_verbatim() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": "12.50"}"#).unwrap();
        assert_eq!(w.amount.as_str(), "12.50");
    }

    #[test]
    fn keeps_number_literals_verbatim() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": 12.50}"#).unwrap();
        assert_eq!(w.amount.to_string(), "12.50");
    }

    #[test]
    fn formats_naive_timestamp_as_local() {
        let ts = Timestamp::new("2024-03-05T14:07:09.123456");
        assert_eq!(ts.localized("%Y-%m-%d %H:%M:%S"), "2024-03-05 14:07:09");
    }

    #[test]
    fn unparseable_timestamp_is_shown_as_received() {
        let ts = Timestamp::new("yesterday");
        assert_eq!(ts.localized("%Y"), "yesterday");
    }

    #[test]
    fn broken_format_falls_back_to_raw_text() {
        let ts = Timestamp::new("2024-03-05T14:07:09");
        assert_eq!(ts.localized("%Q"), "2024-03-05T14:07:09");
    }
}
