//! Decoder implementations
//!
//! Scalar decoders for the upstream encodings, and [`FieldReader`], which reads
//! one JSON object field by field and labels every failure with its path.

use super::types::{DecodeError, FromJson};
use crate::types::{InterestingCode, TriState};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

/// RFC 1123 with a numeric zone offset, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
pub const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

// Character classes per byte: `a` letter, `0` digit, `+` zone sign, else literal
const RFC1123Z_SHAPE: &[u8; 31] = b"aaa, 00 aaa 0000 00:00:00 +0000";
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ============================================================================
// Scalar Decoders
// ============================================================================

/// Strict `"Y"`/`"N"` boolean indicator
pub fn decode_indicator(field: &str, value: &str) -> Result<bool, DecodeError> {
    match value {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(DecodeError::UnsupportedIndicatorValue {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Tolerant tri-state indicator; never fails
pub fn decode_tri_state(value: Option<&str>) -> TriState {
    value.map_or(TriState::Unknown, TriState::from_code)
}

/// Tolerant interesting-activity code; never fails
pub fn decode_interesting_code(value: Option<&str>) -> InterestingCode {
    value.map_or(InterestingCode::Unknown, InterestingCode::from_code)
}

/// Parse a date in the fixed [`RFC1123Z`] layout, with no fallback format
///
/// The weekday must be a valid abbreviation but is not checked against the date.
pub fn decode_date(field: &str, value: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    let date_format = |message: String| DecodeError::DateFormat {
        field: field.to_string(),
        value: value.to_string(),
        message,
    };

    if !matches_rfc1123z_shape(value) {
        return Err(date_format(
            "does not match layout \"Mon, 02 Jan 2006 15:04:05 -0700\"".to_string(),
        ));
    }

    // shape check guarantees ASCII, so byte 5 is a char boundary
    DateTime::parse_from_str(&value[5..], "%d %b %Y %H:%M:%S %z")
        .map_err(|e| date_format(e.to_string()))
}

fn matches_rfc1123z_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != RFC1123Z_SHAPE.len() {
        return false;
    }

    let shape_ok = bytes
        .iter()
        .zip(RFC1123Z_SHAPE)
        .all(|(&b, &class)| match class {
            b'a' => b.is_ascii_alphabetic(),
            b'0' => b.is_ascii_digit(),
            b'+' => b == b'+' || b == b'-',
            literal => b == literal,
        });

    shape_ok && WEEKDAYS.contains(&&value[0..3]) && MONTHS.contains(&&value[8..11])
}

/// Parse a whole response body into a model
pub fn decode_body<T: FromJson>(body: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(body)?;
    T::from_json(&value, "")
}

// ============================================================================
// Field Reader
// ============================================================================

/// Typed, path-aware access to the fields of one JSON object
#[derive(Debug)]
pub struct FieldReader<'a> {
    path: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wrap `value`, which must be a JSON object
    pub fn new(value: &'a Value, path: &'a str) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            other => Err(DecodeError::UnexpectedType {
                field: display_path(path),
                expected: "object",
                found: json_type(other),
            }),
        }
    }

    /// Dotted path of a field of this object
    pub fn path_of(&self, key: &str) -> String {
        join_path(self.path, key)
    }

    /// The raw value of a field; `None` when missing or `null`
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn string(&self, key: &str) -> Result<String, DecodeError> {
        match self.get(key) {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.unexpected(key, "string", other)),
        }
    }

    pub fn i64(&self, key: &str) -> Result<i64, DecodeError> {
        match self.get(key) {
            None => Ok(0),
            Some(v) => v
                .as_i64()
                .ok_or_else(|| self.unexpected(key, "integer", v)),
        }
    }

    pub fn u64(&self, key: &str) -> Result<u64, DecodeError> {
        match self.get(key) {
            None => Ok(0),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| self.unexpected(key, "unsigned integer", v)),
        }
    }

    pub fn f64(&self, key: &str) -> Result<f64, DecodeError> {
        match self.get(key) {
            None => Ok(0.0),
            Some(v) => v.as_f64().ok_or_else(|| self.unexpected(key, "number", v)),
        }
    }

    /// Tri-state field; non-string values count as unknown
    pub fn tri_state(&self, key: &str) -> TriState {
        decode_tri_state(self.get(key).and_then(Value::as_str))
    }

    pub fn interesting_code(&self, key: &str) -> InterestingCode {
        decode_interesting_code(self.get(key).and_then(Value::as_str))
    }

    /// Strict boolean indicator; a missing field is `false`
    pub fn indicator(&self, key: &str) -> Result<bool, DecodeError> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::String(s)) => decode_indicator(&self.path_of(key), s),
            Some(other) => Err(DecodeError::UnsupportedIndicatorValue {
                field: self.path_of(key),
                value: other.to_string(),
            }),
        }
    }

    /// Date field; a missing field is `None`
    pub fn date(&self, key: &str) -> Result<Option<DateTime<FixedOffset>>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => decode_date(&self.path_of(key), s).map(Some),
            Some(other) => Err(self.unexpected(key, "date string", other)),
        }
    }

    /// Embedded model; a missing field is the model's default
    pub fn nested<T: FromJson>(&self, key: &str) -> Result<T, DecodeError> {
        match self.get(key) {
            None => Ok(T::default()),
            Some(v) => T::from_json(v, &self.path_of(key)),
        }
    }

    /// Array of models; a missing field is an empty list
    pub fn list<T: FromJson>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => {
                let base = self.path_of(key);
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| T::from_json(item, &format!("{base}[{i}]")))
                    .collect()
            }
            Some(other) => Err(self.unexpected(key, "array", other)),
        }
    }

    fn unexpected(&self, key: &str, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::UnexpectedType {
            field: self.path_of(key),
            expected,
            found: json_type(found),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<body>".to_string()
    } else {
        path.to_string()
    }
}

/// JSON type name used in error messages
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
