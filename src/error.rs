//! Error types for the ashcam client
//!
//! Every public operation returns `Result<T, Error>`. Failures are never
//! retried or recovered internally: each one is terminal for the call and
//! carries the operation and identifier it happened in.

use crate::context::CancelCause;
use crate::decode::DecodeError;
use crate::http::TransportError;
use thiserror::Error;

/// The main error type for the ashcam client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("days-old and time-range filters cannot be used together")]
    IncompatibleFilters,

    #[error("Invalid value for '{field}': {message}")]
    InvalidFilter { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Call Errors
    // ============================================================================
    #[error("{context}, err: {cause}")]
    Cancelled { context: String, cause: CancelCause },

    #[error("{context}, err: {source}")]
    Transport {
        context: String,
        #[source]
        source: TransportError,
    },

    #[error("{context}, err: resource not found (HTTP {status})")]
    ResourceNotFound { context: String, status: u16 },

    #[error("{context}, err: {source}")]
    Decode {
        context: String,
        #[source]
        source: DecodeError,
    },

    // ============================================================================
    // CLI Errors
    // ============================================================================
    #[error("Output error: {message}")]
    Output { message: String },
}

impl Error {
    /// Create an invalid filter error
    pub fn invalid_filter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(context: impl Into<String>, cause: CancelCause) -> Self {
        Self::Cancelled {
            context: context.into(),
            cause,
        }
    }

    /// Create a transport error
    pub fn transport(context: impl Into<String>, source: TransportError) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error
    pub fn not_found(context: impl Into<String>, status: u16) -> Self {
        Self::ResourceNotFound {
            context: context.into(),
            status,
        }
    }

    /// Create a decode error
    pub fn decode(context: impl Into<String>, source: DecodeError) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Check if the call was cancelled or ran past its deadline
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }

    /// Check if upstream reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ResourceNotFound { .. })
    }

    /// The underlying decode error, if any
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for the ashcam client
pub type Result<T> = std::result::Result<T, Error>;
