//! Webcam metadata

use super::image::{Image, SunInformation};
use crate::decode::{DecodeError, FieldReader, FromJson};
use crate::types::TriState;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

/// A volcano webcam as described by the webcam API
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Webcam {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level
    pub elevation: f64,
    pub bearing_degrees: i64,
    pub external_url: String,

    /// Smithsonian volcano number
    pub vnum: String,
    pub vname: String,

    pub has_images: TriState,
    pub image_total: u64,
    pub first_image_date: Option<DateTime<FixedOffset>>,
    pub first_image_timestamp: i64,
    pub last_image_date: Option<DateTime<FixedOffset>>,
    pub last_image_timestamp: i64,

    pub clear_image_url: String,
    pub current_image_url: String,
    pub current_medium_image_url: String,
    pub current_thumb_image_url: String,

    pub newest_image: Image,

    /// Still set when `sun_information` is empty
    pub timezone: String,
    pub sun_information: SunInformation,
}

impl FromJson for Webcam {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            code: r.string("webcamCode")?,
            name: r.string("webcamName")?,
            latitude: r.f64("latitude")?,
            longitude: r.f64("longitude")?,
            elevation: r.f64("elevationM")?,
            bearing_degrees: r.i64("bearingDeg")?,
            external_url: r.string("externalUrl")?,
            vnum: r.string("vnum")?,
            vname: r.string("vName")?,
            has_images: r.tri_state("hasImages"),
            image_total: r.u64("imageTotal")?,
            first_image_date: r.date("firstImageDate")?,
            first_image_timestamp: r.i64("firstImageTimestamp")?,
            last_image_date: r.date("lastImageDate")?,
            last_image_timestamp: r.i64("lastImageTimestamp")?,
            clear_image_url: r.string("clearImageUrl")?,
            current_image_url: r.string("currentImageUrl")?,
            current_medium_image_url: r.string("currentMediumImageUrl")?,
            current_thumb_image_url: r.string("currentThumbImageUrl")?,
            newest_image: r.nested("newestImage")?,
            timezone: r.string("timezone")?,
            sun_information: r.nested("suninfo")?,
        })
    }
}
