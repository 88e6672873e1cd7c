//! # Outbound Ports
//!
//! Traits for what the gateway depends on: a source of the current backend
//! domain and a client for the outbound hop. Doubles live here so the
//! unified test suite can drive the full surface without sockets.

use crate::domain::error::ForwardError;
use crate::domain::types::{OutboundRequest, UpstreamResponse};
use async_trait::async_trait;
use bytes::Bytes;
use cp_01_backend_resolver::ResolveError;
use http::{HeaderValue, StatusCode};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of the current backend domain - outbound port.
#[async_trait]
pub trait BackendSource: Send + Sync {
    /// The domain to forward to right now.
    async fn resolve(&self) -> Result<String, ResolveError>;
}

/// Client for the outbound hop - outbound port.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issue the outbound request and collect the response to relay.
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, ForwardError>;
}

/// Backend source double: fixed domain or fixed failure, with a call
/// counter.
pub struct MockBackendSource {
    outcome: Result<String, ResolveError>,
    calls: AtomicUsize,
}

impl MockBackendSource {
    /// Always resolves to `domain`.
    pub fn fixed(domain: &str) -> Self {
        Self {
            outcome: Ok(domain.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails resolution.
    pub fn failing() -> Self {
        Self {
            outcome: Err(ResolveError::NoDomainAvailable),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of resolutions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendSource for MockBackendSource {
    async fn resolve(&self) -> Result<String, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Upstream client double: canned response, recorded requests.
pub struct MockUpstreamClient {
    status: StatusCode,
    content_type: Option<HeaderValue>,
    body: Bytes,
    fail_with: Option<String>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl MockUpstreamClient {
    /// 200 with a small text body.
    pub fn ok() -> Self {
        Self::with_response(
            StatusCode::OK,
            Some(HeaderValue::from_static("text/plain")),
            Bytes::from_static(b"upstream ok"),
        )
    }

    /// Canned response with the given status, content type and body.
    pub fn with_response(
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    ) -> Self {
        Self {
            status,
            content_type,
            body,
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request fails with the given transport error message.
    pub fn failing(message: &str) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: None,
            body: Bytes::new(),
            fail_with: Some(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests issued so far, in order.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, ForwardError> {
        self.requests.lock().push(request);
        if let Some(message) = &self.fail_with {
            return Err(ForwardError::Upstream(message.clone()));
        }
        Ok(UpstreamResponse {
            status: self.status,
            content_type: self.content_type.clone(),
            body: self.body.clone(),
        })
    }
}
