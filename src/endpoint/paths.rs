//! Upstream URL layout

use super::request::ImageRequest;
use crate::error::{Error, Result};
use url::Url;

/// Root of the public USGS ashcam API
pub const DEFAULT_BASE_URL: &str = "https://volcview.wr.usgs.gov/ashcam-api";

/// Renders the URLs of the three upstream endpoints
///
/// Webcam codes are inserted verbatim, without percent-encoding. Codes
/// containing reserved characters produce requests upstream will reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Use `base_url` as the API root; it must be an absolute http(s) URL
    /// with no query or fragment
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::config(format!(
                "base URL must not carry a query or fragment, got '{base_url}'"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/webcamApi/webcam/{code}`
    pub fn webcam(&self, code: &str) -> String {
        format!("{}/webcamApi/webcam/{code}", self.base_url)
    }

    /// `{base}/webcamApi/webcams`
    pub fn webcams(&self) -> String {
        format!("{}/webcamApi/webcams", self.base_url)
    }

    /// `{base}/imageApi/webcam/{code}` with the request's filter suffix
    pub fn images(&self, request: &ImageRequest) -> String {
        format!(
            "{}/imageApi/webcam/{}{}",
            self.base_url,
            request.webcam_code(),
            request.path_suffix()
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
