//! Image listing requests
//!
//! An [`ImageRequest`] can only be obtained through [`ImageRequestBuilder::build`],
//! which rejects invalid filter combinations. Once built, the day-count and
//! time-range filters are represented by a single [`ImageFilter`], so a request
//! carrying both cannot exist.

use crate::error::{Error, Result};
use crate::types::Order;
use chrono::{DateTime, Utc};
use std::num::NonZeroU32;

/// Inclusive window of image capture times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    fn validate(&self) -> Result<()> {
        if self.start.timestamp() <= 0 || self.end.timestamp() <= 0 {
            return Err(Error::invalid_filter(
                "time_range",
                "start and end must be after the unix epoch",
            ));
        }
        if self.start > self.end {
            return Err(Error::invalid_filter(
                "time_range",
                format!("start {} is after end {}", self.start, self.end),
            ));
        }
        Ok(())
    }
}

/// Which images of a webcam to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFilter {
    /// Whatever upstream returns by default
    #[default]
    Unfiltered,
    /// Images taken within the last N days
    DaysOld(NonZeroU32),
    /// Images taken within a time window
    TimeRange(TimeRange),
}

/// A validated request for the images of one webcam
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    webcam_code: String,
    filter: ImageFilter,
    order: Order,
    limit: u32,
}

impl ImageRequest {
    /// Start building a request for `webcam_code`
    pub fn builder(webcam_code: impl Into<String>) -> ImageRequestBuilder {
        ImageRequestBuilder::new(webcam_code)
    }

    pub fn webcam_code(&self) -> &str {
        &self.webcam_code
    }

    pub fn filter(&self) -> ImageFilter {
        self.filter
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Maximum number of images, 0 when unbounded
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Path segments appended after the webcam code, empty when unfiltered
    pub fn path_suffix(&self) -> String {
        match self.filter {
            ImageFilter::Unfiltered => String::new(),
            ImageFilter::DaysOld(days) => {
                format!("/{days}/{}/{}", self.order.as_segment(), self.limit)
            }
            ImageFilter::TimeRange(range) => format!(
                "/{}/{}/{}/{}",
                range.start.timestamp(),
                range.end.timestamp(),
                self.order.as_segment(),
                self.limit
            ),
        }
    }
}

/// Builder for [`ImageRequest`]
#[derive(Debug, Clone, Default)]
pub struct ImageRequestBuilder {
    webcam_code: String,
    days_old: Option<u32>,
    time_range: Option<TimeRange>,
    order: Order,
    limit: u32,
}

impl ImageRequestBuilder {
    pub fn new(webcam_code: impl Into<String>) -> Self {
        Self {
            webcam_code: webcam_code.into(),
            ..Default::default()
        }
    }

    /// Only images taken within the last `days` days
    #[must_use]
    pub fn days_old(mut self, days: u32) -> Self {
        self.days_old = Some(days);
        self
    }

    /// Only images taken between `start` and `end`
    #[must_use]
    pub fn time_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.time_range = Some(TimeRange::new(start, end));
        self
    }

    /// Newest first when `true` (the default), oldest first otherwise
    #[must_use]
    pub fn newest_first(mut self, newest_first: bool) -> Self {
        self.order = Order::from(newest_first);
        self
    }

    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Maximum number of images; 0 leaves it to upstream
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Validate and build the request
    pub fn build(self) -> Result<ImageRequest> {
        let filter = match (self.days_old, self.time_range) {
            (Some(_), Some(_)) => return Err(Error::IncompatibleFilters),
            (Some(days), None) => {
                let days = NonZeroU32::new(days).ok_or_else(|| {
                    Error::invalid_filter("days_old", "must be a positive number of days")
                })?;
                ImageFilter::DaysOld(days)
            }
            (None, Some(range)) => {
                range.validate()?;
                ImageFilter::TimeRange(range)
            }
            (None, None) => ImageFilter::Unfiltered,
        };

        if self.webcam_code.is_empty() {
            return Err(Error::invalid_filter("webcam_code", "must not be empty"));
        }

        Ok(ImageRequest {
            webcam_code: self.webcam_code,
            filter,
            order: self.order,
            limit: self.limit,
        })
    }
}
