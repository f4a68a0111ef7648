//! Top-level response bodies of the three endpoints

use super::image::Image;
use super::webcam::Webcam;
use crate::decode::{DecodeError, FieldReader, FromJson};
use serde::Serialize;
use serde_json::Value;

/// Query statistics attached to an image listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub api_url: String,
    pub image_total: u64,
    pub first_image_timestamp: i64,
    pub last_image_timestamp: i64,
    pub query_sec: f64,
}

impl FromJson for Meta {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            api_url: r.string("apiUrl")?,
            image_total: r.u64("imageTotal")?,
            first_image_timestamp: r.i64("firstImageTimestamp")?,
            last_image_timestamp: r.i64("lastImageTimestamp")?,
            query_sec: r.f64("querySec")?,
        })
    }
}

/// Query statistics attached to the webcam collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcamsMeta {
    pub api_url: String,
    pub total: u64,
    pub query_sec: f64,
}

impl FromJson for WebcamsMeta {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            api_url: r.string("apiUrl")?,
            total: r.u64("total")?,
            query_sec: r.f64("querySec")?,
        })
    }
}

/// Body of the single-webcam endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WebcamResponse {
    pub webcam: Webcam,
}

impl FromJson for WebcamResponse {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            webcam: r.nested("webcam")?,
        })
    }
}

/// Body of the webcam collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebcamsResponse {
    pub webcams: Vec<Webcam>,
    pub webcams_meta: WebcamsMeta,
}

impl FromJson for WebcamsResponse {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            webcams: r.list("webcams")?,
            webcams_meta: r.nested("meta")?,
        })
    }
}

/// Body of the image endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageApiResponse {
    pub images: Vec<Image>,
    pub meta: Meta,
    pub webcam: Webcam,
}

impl FromJson for ImageApiResponse {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            images: r.list("images")?,
            meta: r.nested("meta")?,
            webcam: r.nested("webcam")?,
        })
    }
}
