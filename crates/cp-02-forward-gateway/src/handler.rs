//! # Proxy Handler
//!
//! The single axum handler behind the entry path. Captures the inbound
//! request, runs it through the engine, and relays the result. This is the
//! outermost error boundary: every failure below becomes a plain-text 500
//! whose body is `"error"` followed by the error's text.

use crate::domain::types::{InboundRequest, UpstreamResponse};
use crate::engine::ForwardEngine;
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::error;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The forwarding engine.
    pub engine: Arc<ForwardEngine>,
    /// Entry path to strip from inbound URIs.
    pub entry_path: String,
}

/// Handle one proxied request.
pub async fn proxy_entrypoint(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let inbound = InboundRequest {
        method,
        path_rest: strip_entry_path(uri.path(), &state.entry_path),
        query: uri.query().map(str::to_string),
        headers,
        body,
        peer_addr: connect_info.map(|info| info.0),
    };

    match state.engine.forward(inbound).await {
        Ok(upstream) => relay(upstream),
        Err(e) => {
            error!(error = %e, "proxy request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("error{e}")).into_response()
        }
    }
}

/// Path remainder below the entry path, without a leading slash.
fn strip_entry_path(path: &str, entry_path: &str) -> String {
    path.strip_prefix(entry_path)
        .unwrap_or(path)
        .trim_start_matches('/')
        .to_string()
}

/// Relay status, content type and body; nothing else crosses back.
fn relay(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;
    if let Some(content_type) = upstream.content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}
