//! Response models
//!
//! Immutable snapshots built once per decoded response. Every model implements
//! [`FromJson`](crate::decode::FromJson) by reading its fields explicitly;
//! absent fields keep their zero value.

mod image;
mod responses;
mod webcam;

pub use image::{Image, SunInformation};
pub use responses::{ImageApiResponse, Meta, WebcamResponse, WebcamsMeta, WebcamsResponse};
pub use webcam::Webcam;
