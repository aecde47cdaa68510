//! Loosely-typed attribute values
//!
//! Request context entries and condition operands share one closed value type.
//! Each comparator coerces through the `as_*` / `to_*` helpers below, which
//! return `None` instead of guessing when a value is outside their domain.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request context: attribute key to value
pub type Context = HashMap<String, AttributeValue>;

/// Accepted textual date layouts, tried in order after RFC 3339
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";
// `%.f` also matches an absent fraction
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A context attribute or condition operand
///
/// Decoded from JSON untagged, in variant order: `null`, booleans, integers,
/// floats, then strings. Strings are never promoted to timestamps on decode;
/// the date comparator parses them on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Missing / nil value
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Native timestamp (serializes as RFC 3339)
    Timestamp(DateTime<Utc>),
}

impl AttributeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Exact string type only; numbers and booleans are not stringified
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Exact boolean type only
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integers, floats and numeric-looking strings
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(n) => Some(*n as f64),
            AttributeValue::Float(n) => Some(*n),
            AttributeValue::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Native timestamps, or strings in one of the accepted layouts
    ///
    /// Layouts are tried in order and the first successful parse wins:
    /// RFC 3339 with offset, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`,
    /// `YYYY-MM-DD HH:MM:SS`. Layouts without an offset are read as UTC.
    /// Every date-time layout takes optional fractional seconds.
    ///
    /// RFC 3339 parsing is lenient about the separator: a space or a lowercase
    /// `t` is accepted in place of `T`, so `2024-03-15 14:30:00+02:00` parses.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            AttributeValue::Timestamp(ts) => Some(*ts),
            AttributeValue::String(s) => parse_datetime(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::Bool(_) => "bool",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Float(_) => "float",
            AttributeValue::String(_) => "string",
            AttributeValue::Timestamp(_) => "timestamp",
        }
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, NAIVE_DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        AttributeValue::Float(f64::from(value))
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Timestamp(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}
