//! Endpoint construction
//!
//! Turns logical requests into upstream URLs. Image listings accept either a
//! day-count or a time-range filter, never both:
//!
//! ```text
//! {base}/imageApi/webcam/{code}
//! {base}/imageApi/webcam/{code}/{daysOld}/{order}/{limit}
//! {base}/imageApi/webcam/{code}/{startUnix}/{endUnix}/{order}/{limit}
//! ```

mod paths;
mod request;

pub use paths::{Endpoints, DEFAULT_BASE_URL};
pub use request::{ImageFilter, ImageRequest, ImageRequestBuilder, TimeRange};
