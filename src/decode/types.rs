//! Decoder types and traits
//!
//! Defines the decode error taxonomy and the trait every response model
//! implements.

use serde_json::Value;
use thiserror::Error;

/// Failure to turn a response body into a typed model
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{field}': expected {expected}, found {found}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}': unsupported value {value:?} for boolean indicator")]
    UnsupportedIndicatorValue { field: String, value: String },

    #[error("field '{field}': {value:?} is not an RFC 1123 date with numeric zone: {message}")]
    DateFormat {
        field: String,
        value: String,
        message: String,
    },
}

impl DecodeError {
    /// Dotted path of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::Json(_) => None,
            DecodeError::UnexpectedType { field, .. }
            | DecodeError::UnsupportedIndicatorValue { field, .. }
            | DecodeError::DateFormat { field, .. } => Some(field),
        }
    }
}

/// A model that can be built from a parsed JSON value
///
/// `path` is the dotted location of `value` within the response body and is
/// only used to label errors. Missing or `null` fields take their `Default`.
pub trait FromJson: Sized + Default {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError>;
}
