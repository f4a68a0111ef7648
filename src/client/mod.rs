//! Ashcam API client
//!
//! Every call runs the same steps: check the context, validate and render the
//! URL, GET it through the transport, require HTTP 200, decode the body. Any
//! failure ends the call; nothing is retried.

use crate::context::CallContext;
use crate::decode::{decode_body, FromJson};
use crate::endpoint::{Endpoints, ImageRequest};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, HttpTransport, TransportError};
use crate::models::{ImageApiResponse, WebcamResponse, WebcamsResponse};
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the webcam and image APIs
///
/// Holds no mutable state; clone it or share it across tasks freely.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    endpoints: Endpoints,
}

impl Client {
    /// Client for the public API over the default transport
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Client for the public API over a custom transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            endpoints: Endpoints::default(),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch one webcam by code
    pub async fn get_webcam(&self, ctx: &CallContext, code: &str) -> Result<WebcamResponse> {
        let context = format!("unable to get webcam {code:?}");
        self.fetch(ctx, &context, |endpoints| {
            if code.is_empty() {
                return Err(Error::invalid_filter("webcam_code", "must not be empty"));
            }
            Ok(endpoints.webcam(code))
        })
        .await
    }

    /// Fetch every webcam
    pub async fn get_webcams(&self, ctx: &CallContext) -> Result<WebcamsResponse> {
        self.fetch(ctx, "unable to get all webcams", |endpoints| {
            Ok(endpoints.webcams())
        })
        .await
    }

    /// Fetch the images of one webcam
    pub async fn get_images(
        &self,
        ctx: &CallContext,
        request: &ImageRequest,
    ) -> Result<ImageApiResponse> {
        let context = format!(
            "unable to get images of webcam {:?}",
            request.webcam_code()
        );
        self.fetch(ctx, &context, |endpoints| Ok(endpoints.images(request)))
            .await
    }

    async fn fetch<T, F>(&self, ctx: &CallContext, context: &str, url: F) -> Result<T>
    where
        T: FromJson,
        F: FnOnce(&Endpoints) -> Result<String>,
    {
        if let Some(cause) = ctx.err() {
            return Err(Error::cancelled(context, cause));
        }

        let url = url(&self.endpoints)?;
        debug!("GET {}", url);

        let response = self
            .transport
            .get(&url, ctx)
            .await
            .map_err(|e| match e {
                TransportError::Cancelled(cause) => Error::cancelled(context, cause),
                other => Error::transport(context, other),
            })?;

        if !response.is_ok() {
            warn!("GET {} returned HTTP {}", url, response.status);
            return Err(Error::not_found(context, response.status));
        }

        decode_body(&response.body).map_err(|e| Error::decode(context, e))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`]
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    http_config: Option<HttpClientConfig>,
}

impl ClientBuilder {
    /// Point the client at another API root
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a custom transport; overrides `http_config`
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Configure the default transport
    #[must_use]
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    pub fn build(self) -> Result<Client> {
        let endpoints = match self.base_url {
            Some(url) => Endpoints::new(&url)?,
            None => Endpoints::default(),
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let config = self.http_config.unwrap_or_default();
                let http = HttpClient::with_config(config)
                    .map_err(|e| Error::transport("unable to build HTTP client", e))?;
                Arc::new(http)
            }
        };

        Ok(Client {
            transport,
            endpoints,
        })
    }
}

#[cfg(test)]
mod tests;
