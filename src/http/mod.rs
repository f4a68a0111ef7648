//! HTTP transport module
//!
//! The client talks to upstream only through the [`HttpTransport`] trait.
//! [`HttpClient`] is the default implementation.
//!
//! # Features
//!
//! - **Cancellation**: in-flight requests are dropped when the call context fires
//! - **Rate Limiting**: optional token bucket rate limiter using governor
//! - **Timeouts**: per-client request timeout

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{HttpTransport, TransportError, TransportResponse};

#[cfg(test)]
mod tests;
