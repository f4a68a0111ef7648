//! Image and sun-information snapshots

use crate::decode::{DecodeError, FieldReader, FromJson};
use crate::types::{InterestingCode, TriState};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

/// Local time and civil twilight at a webcam when a snapshot was taken
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunInformation {
    pub timezone: String,
    pub current_time: Option<DateTime<FixedOffset>>,
    pub current_time_timestamp: i64,
    pub civil_twilight_sunrise: Option<DateTime<FixedOffset>>,
    pub civil_twilight_sunrise_timestamp: i64,
    pub civil_twilight_sunset: Option<DateTime<FixedOffset>>,
    pub civil_twilight_sunset_timestamp: i64,
}

impl FromJson for SunInformation {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let r = FieldReader::new(value, path)?;
        Ok(Self {
            timezone: r.string("timezone")?,
            current_time: r.date("time_in")?,
            current_time_timestamp: r.i64("time_in_unixtime")?,
            civil_twilight_sunrise: r.date("civil_twilight_sunrise")?,
            civil_twilight_sunrise_timestamp: r.i64("civil_twilight_sunrise_unixtime")?,
            civil_twilight_sunset: r.date("civil_twilight_sunset")?,
            civil_twilight_sunset_timestamp: r.i64("civil_twilight_sunset_unixtime")?,
        })
    }
}

/// One webcam image
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: u64,
    pub md5: String,
    pub webcam_code: String,
    pub url: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub timestamp: i64,
    pub is_newest_for_webcam: TriState,
    pub interesting_code: InterestingCode,
    pub is_night_time: TriState,
    pub sun_information: SunInformation,
}

impl Image {
    pub fn is_interesting(&self) -> bool {
        self.interesting_code.is_interesting()
    }
}

impl FromJson for Image {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        // upstream sends `[]` when a webcam has no newest image
        if matches!(value, Value::Array(items) if items.is_empty()) {
            return Ok(Self::default());
        }

        let r = FieldReader::new(value, path)?;
        Ok(Self {
            id: r.u64("imageId")?,
            md5: r.string("md5")?,
            webcam_code: r.string("webcamCode")?,
            url: r.string("imageUrl")?,
            date: r.date("imageDate")?,
            timestamp: r.i64("imageTimestamp")?,
            is_newest_for_webcam: r.tri_state("newestForWebcam"),
            interesting_code: r.interesting_code("interestingCode"),
            is_night_time: r.tri_state("isNighttimeInd"),
            sun_information: r.nested("suninfo")?,
        })
    }
}
