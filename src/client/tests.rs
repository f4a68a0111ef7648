//! Tests for the client against an in-memory transport

use super::*;
use crate::context::CancelCause;
use crate::decode::DecodeError;
use crate::http::TransportResponse;
use crate::types::TriState;
use async_trait::async_trait;
use std::sync::Mutex;

const WEBCAM_JSON: &str = include_str!("../../tests/fixtures/webcam.json");
const IMAGES_JSON: &str = include_str!("../../tests/fixtures/images.json");

/// Replies with a fixed response and records every requested URL
struct StubTransport {
    status: u16,
    body: &'static str,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(
        &self,
        url: &str,
        _ctx: &CallContext,
    ) -> std::result::Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(TransportResponse::new(self.status, self.body))
    }
}

/// Fails every request the way a transport that honors cancellation would
struct CancellingTransport;

#[async_trait]
impl HttpTransport for CancellingTransport {
    async fn get(
        &self,
        _url: &str,
        _ctx: &CallContext,
    ) -> std::result::Result<TransportResponse, TransportError> {
        Err(TransportError::Cancelled(CancelCause::Cancelled))
    }
}

struct BrokenTransport;

#[async_trait]
impl HttpTransport for BrokenTransport {
    async fn get(
        &self,
        _url: &str,
        _ctx: &CallContext,
    ) -> std::result::Result<TransportResponse, TransportError> {
        Err(TransportError::Other("connection reset".to_string()))
    }
}

fn client(transport: Arc<dyn HttpTransport>) -> Client {
    Client::builder()
        .base_url("https://ashcam.test/api")
        .transport(transport)
        .build()
        .unwrap()
}

// ============================================================================
// Happy Paths
// ============================================================================

#[tokio::test]
async fn test_get_webcam() {
    let transport = StubTransport::new(200, WEBCAM_JSON);
    let res = client(transport.clone())
        .get_webcam(&CallContext::new(), "redoubt-2")
        .await
        .unwrap();

    assert_eq!(res.webcam.code, "redoubt-2");
    assert_eq!(res.webcam.has_images, TriState::Yes);
    assert_eq!(
        transport.requests(),
        vec!["https://ashcam.test/api/webcamApi/webcam/redoubt-2"]
    );
}

#[tokio::test]
async fn test_get_webcams_url() {
    let transport = StubTransport::new(200, r#"{"webcams": [], "meta": {"total": 0}}"#);
    let res = client(transport.clone())
        .get_webcams(&CallContext::new())
        .await
        .unwrap();

    assert!(res.webcams.is_empty());
    assert_eq!(
        transport.requests(),
        vec!["https://ashcam.test/api/webcamApi/webcams"]
    );
}

#[tokio::test]
async fn test_get_images_days_old() {
    let transport = StubTransport::new(200, IMAGES_JSON);
    let request = ImageRequest::builder("redoubt-2").days_old(7).build().unwrap();
    let res = client(transport.clone())
        .get_images(&CallContext::new(), &request)
        .await
        .unwrap();

    assert_eq!(res.images.len(), 2);
    assert_eq!(
        transport.requests(),
        vec!["https://ashcam.test/api/imageApi/webcam/redoubt-2/7/newestFirst/0"]
    );
}

#[test]
fn test_default_client_uses_public_api() {
    let client = Client::with_transport(StubTransport::new(200, "{}"));
    assert_eq!(
        client.endpoints().base_url(),
        crate::endpoint::DEFAULT_BASE_URL
    );
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_cancelled_context_performs_no_io() {
    let transport = StubTransport::new(200, WEBCAM_JSON);
    let client = client(transport.clone());
    let ctx = CallContext::new();
    ctx.cancel();

    let err = client.get_webcam(&ctx, "redoubt-2").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Cancelled {
            cause: CancelCause::Cancelled,
            ..
        }
    ));
    assert!(err.to_string().starts_with("unable to get webcam \"redoubt-2\""));

    let err = client.get_webcams(&ctx).await.unwrap_err();
    assert!(err.is_cancelled());

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_expired_deadline_performs_no_io() {
    let transport = StubTransport::new(200, IMAGES_JSON);
    let request = ImageRequest::builder("redoubt-2").build().unwrap();
    let ctx = CallContext::with_timeout(std::time::Duration::ZERO);

    let err = client(transport.clone())
        .get_images(&ctx, &request)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Cancelled {
            cause: CancelCause::DeadlineExceeded,
            ..
        }
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_in_flight_cancellation_is_cancelled_error() {
    let err = client(Arc::new(CancellingTransport))
        .get_webcams(&CallContext::new())
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_transport_failure() {
    let err = client(Arc::new(BrokenTransport))
        .get_webcam(&CallContext::new(), "redoubt-2")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(
        err.to_string(),
        "unable to get webcam \"redoubt-2\", err: connection reset"
    );
}

#[tokio::test]
async fn test_non_200_is_not_found() {
    let transport = StubTransport::new(404, "Not Found");
    let err = client(transport)
        .get_webcam(&CallContext::new(), "nope")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ResourceNotFound { status: 404, .. }));
}

#[tokio::test]
async fn test_webcams_non_200_is_not_found() {
    let transport = StubTransport::new(503, "");
    let err = client(transport)
        .get_webcams(&CallContext::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_invalid_body_is_decode_error() {
    let transport = StubTransport::new(200, "<html>maintenance</html>");
    let err = client(transport)
        .get_webcams(&CallContext::new())
        .await
        .unwrap_err();

    assert!(matches!(err.decode_error(), Some(DecodeError::Json(_))));
}

#[tokio::test]
async fn test_empty_code_rejected_before_io() {
    let transport = StubTransport::new(200, WEBCAM_JSON);
    let err = client(transport.clone())
        .get_webcam(&CallContext::new(), "")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidFilter { .. }));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_cancellation_checked_before_empty_code() {
    let transport = StubTransport::new(200, WEBCAM_JSON);
    let ctx = CallContext::new();
    ctx.cancel();

    let err = client(transport.clone())
        .get_webcam(&ctx, "")
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(transport.requests().is_empty());
}

#[test]
fn test_builder_rejects_bad_base_url() {
    let result = Client::builder()
        .base_url("::not a url::")
        .transport(StubTransport::new(200, "{}"))
        .build();
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}
