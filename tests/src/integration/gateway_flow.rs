//! Full requests through the public router: real resolver, real engine,
//! scripted RPC transport and upstream client.

use super::{encode_domain, scripted_resolver};
use axum::body::{to_bytes, Body};
use bytes::Bytes;
use cp_01_backend_resolver::{FixedClock, MockRpcTransport};
use cp_02_forward_gateway::{
    ForwardGatewayService, GatewayConfig, MockUpstreamClient, OnChainBackendSource,
};
use http::{HeaderValue, Method, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

struct Harness {
    transport: Arc<MockRpcTransport>,
    upstream: Arc<MockUpstreamClient>,
    service: ForwardGatewayService,
}

fn harness(upstream: MockUpstreamClient) -> Harness {
    let transport = Arc::new(MockRpcTransport::new());
    let clock = Arc::new(FixedClock::at(10_000));
    let resolver = Arc::new(scripted_resolver(Arc::clone(&transport), clock));
    let upstream = Arc::new(upstream);
    let service = ForwardGatewayService::new(
        GatewayConfig::for_testing(),
        Arc::new(OnChainBackendSource::new(resolver)),
        upstream.clone(),
    )
    .unwrap();
    Harness {
        transport,
        upstream,
        service,
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_request_end_to_end() {
    let h = harness(MockUpstreamClient::with_response(
        StatusCode::OK,
        Some(HeaderValue::from_static("text/html; charset=utf-8")),
        Bytes::from_static(b"<html>backend</html>"),
    ));
    h.transport.push_result(&encode_domain("https://example.org/"));

    let response = h
        .service
        .router()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/secureproxy.php/foo/bar?x=1")
                .header("user-agent", "curl/8.0")
                .header("host", "proxy.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );
    assert_eq!(body_string(response).await, "<html>backend</html>");

    let sent = h.upstream.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://example.org/foo/bar?x=1");
    assert_eq!(sent[0].headers.get("user-agent").unwrap(), "curl/8.0");
    assert!(sent[0].headers.get("host").is_none());
}

#[tokio::test]
async fn test_post_with_stale_content_length_is_reframed() {
    let h = harness(MockUpstreamClient::ok());
    h.transport.push_result(&encode_domain("https://example.org"));

    let binary_body: &[u8] = &[0x00, 0xff, 0x10, 0x20, 0x7f];
    let response = h
        .service
        .router()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/secureproxy.php/upload")
                // Wrong on purpose; the proxy must drop it, not fix it.
                .header("content-length", "3")
                .body(Body::from(binary_body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sent = h.upstream.requests();
    assert!(sent[0].headers.get("content-length").is_none());
    assert_eq!(sent[0].body.as_deref(), Some(binary_body));
}

#[tokio::test]
async fn test_rpc_outage_surfaces_as_plain_500() {
    let h = harness(MockUpstreamClient::ok());
    h.transport.push_rpc_error(-32000, "rate limited");
    h.transport.push_http_error("connection refused");

    let response = h
        .service
        .router()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/secureproxy.php")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("error"), "unexpected body: {body}");
    // Both endpoints were tried before giving up; none was retried.
    assert_eq!(h.transport.call_count(), 2);
    assert!(h.upstream.requests().is_empty());
}

#[tokio::test]
async fn test_options_preflight_stays_local() {
    let h = harness(MockUpstreamClient::ok());

    let response = h
        .service
        .router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/secureproxy.php/anything?q=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(
        response.headers().get("access-control-allow-methods").unwrap(),
        "GET, HEAD, POST, PUT, PATCH, DELETE, OPTIONS"
    );
    assert_eq!(
        response.headers().get("access-control-allow-headers").unwrap(),
        "*"
    );
    assert_eq!(
        response.headers().get("access-control-max-age").unwrap(),
        "3600"
    );
    // No resolution, no forwarding.
    assert_eq!(h.transport.call_count(), 0);
    assert!(h.upstream.requests().is_empty());
}

#[tokio::test]
async fn test_second_request_within_ttl_reuses_resolution() {
    let h = harness(MockUpstreamClient::ok());
    h.transport.push_result(&encode_domain("https://example.org"));

    for path in ["/secureproxy.php/a", "/secureproxy.php/b"] {
        let response = h
            .service
            .router()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(h.transport.call_count(), 1);
    assert_eq!(h.upstream.requests().len(), 2);
}
