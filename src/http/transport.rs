//! The transport seam
//!
//! The client only ever issues GET requests and reads the whole body. Anything
//! that can do that, honoring a [`CallContext`] as far as it is able, can stand
//! in for the default reqwest transport.

use crate::context::{CallContext, CancelCause};
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Status and fully-read body of one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Failure to complete an exchange
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("{0}")]
    Cancelled(CancelCause),

    #[error("{0}")]
    Other(String),
}

/// Issues GET requests on behalf of the client
///
/// Implementations must be safe to share between concurrent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` and read the whole body
    async fn get(&self, url: &str, ctx: &CallContext) -> Result<TransportResponse, TransportError>;
}
