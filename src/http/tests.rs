//! Tests for the HTTP transport module

use super::*;
use crate::context::{CallContext, CancelCause};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("ashcam/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .rate_limit(RateLimiterConfig::new(1, 1))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(1, 1)));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");

    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());
}

#[test]
fn test_transport_response_status() {
    assert!(TransportResponse::new(200, "{}").is_ok());
    assert!(!TransportResponse::new(404, "").is_ok());
}

#[tokio::test]
async fn test_http_client_get_reads_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webcamApi/webcams"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"webcams": []}"#))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let url = format!("{}/webcamApi/webcams", mock_server.uri());
    let response = client.get(&url, &CallContext::new()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(&response.body[..], br#"{"webcams": []}"#);
}

#[tokio::test]
async fn test_rate_limit_wait_gives_up_at_deadline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(1, 1))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client
        .get(&mock_server.uri(), &CallContext::new())
        .await
        .unwrap();

    let ctx = CallContext::with_timeout(Duration::from_millis(50));
    let err = client.get(&mock_server.uri(), &ctx).await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Cancelled(CancelCause::DeadlineExceeded)
    ));
}

#[tokio::test]
async fn test_http_client_passes_through_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .get(&mock_server.uri(), &CallContext::new())
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(&response.body[..], b"Not found");
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("X-Api-Key", "secret123"))
        .and(header("user-agent", "ashcam-test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .header("X-Api-Key", "secret123")
        .user_agent("ashcam-test")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .get(&mock_server.uri(), &CallContext::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get(&mock_server.uri(), &CallContext::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout { timeout_ms: 100 }));
}

#[tokio::test]
async fn test_http_client_aborts_on_deadline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let ctx = CallContext::with_timeout(Duration::from_millis(50));
    let err = client.get(&mock_server.uri(), &ctx).await.unwrap_err();

    assert!(matches!(
        err,
        TransportError::Cancelled(CancelCause::DeadlineExceeded)
    ));
}

#[tokio::test]
async fn test_http_client_aborts_on_cancel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let ctx = CallContext::new();
    let handle = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();
    });

    let err = client.get(&mock_server.uri(), &ctx).await.unwrap_err();
    assert!(matches!(err, TransportError::Cancelled(CancelCause::Cancelled)));
}

#[tokio::test]
async fn test_http_client_connection_refused() {
    let client = HttpClient::new().unwrap();
    let err = client
        .get("http://127.0.0.1:9/nothing", &CallContext::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Http(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("has_rate_limiter: false"));
}
