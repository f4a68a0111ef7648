//! # ashcam
//!
//! Client for the USGS volcano webcam ("ashcam") API: webcam metadata, image
//! listings, and the sun information attached to both.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ashcam::{CallContext, Client, ImageRequest, Result};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new()?;
//!     let ctx = CallContext::with_timeout(Duration::from_secs(10));
//!
//!     let webcam = client.get_webcam(&ctx, "akunIsland-N").await?;
//!     println!("{}", webcam.webcam.clear_image_url);
//!
//!     let request = ImageRequest::builder("redoubt-2").days_old(7).build()?;
//!     let images = client.get_images(&ctx, &request).await?;
//!     println!("{} images", images.images.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                        Client                          │
//! │  get_webcam()     get_webcams()     get_images()       │
//! └────────────────────────────────────────────────────────┘
//!            │                 │                  │
//! ┌──────────┴─────┬───────────┴──────┬───────────┴───────┐
//! │   Endpoint     │    Transport     │      Decode       │
//! ├────────────────┼──────────────────┼───────────────────┤
//! │ ImageRequest   │ HttpTransport    │ FieldReader       │
//! │ Endpoints      │ HttpClient       │ Y/N/U indicators  │
//! │                │ CallContext      │ RFC 1123 dates    │
//! └────────────────┴──────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Upstream scalar encodings
pub mod types;

/// Cancellation and deadlines
pub mod context;

/// URL construction and request validation
pub mod endpoint;

/// JSON decoding helpers
pub mod decode;

/// Response models
pub mod models;

/// HTTP transport
pub mod http;

/// The API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, ClientBuilder};
pub use context::{CallContext, CancelCause};
pub use endpoint::{ImageRequest, TimeRange};
pub use error::{Error, Result};
pub use models::*;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
