//! # Request & Response Types
//!
//! The engine's view of a request. The HTTP surface owns the raw axum
//! request; the engine only ever sees these, which keeps it independent of
//! the server framework and trivially testable.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::net::SocketAddr;

/// An inbound request as captured under the entry path. Read-only to the
/// engine.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    /// HTTP method, forwarded as-is.
    pub method: Method,
    /// Path remainder below the entry path, without a leading slash. Empty
    /// when the entry path itself was requested.
    pub path_rest: String,
    /// Raw query string without the leading `?`, if any.
    pub query: Option<String>,
    /// All inbound headers.
    pub headers: HeaderMap,
    /// Raw body bytes. Ignored for bodyless methods.
    pub body: Bytes,
    /// Transport-layer peer address, when known.
    pub peer_addr: Option<SocketAddr>,
}

/// The outbound request derived from an [`InboundRequest`] and the resolved
/// backend domain.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// Same method as inbound.
    pub method: Method,
    /// Full target URL: backend domain + path remainder + query string.
    pub url: String,
    /// Filtered inbound headers plus the client-IP header.
    pub headers: HeaderMap,
    /// Body for methods that carry one; `None` for GET/HEAD.
    pub body: Option<Bytes>,
}

/// What the proxy relays back: status, content type, and the body verbatim.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Upstream status code, relayed unchanged.
    pub status: StatusCode,
    /// Upstream `content-type`, if present.
    pub content_type: Option<HeaderValue>,
    /// Full response body.
    pub body: Bytes,
}
