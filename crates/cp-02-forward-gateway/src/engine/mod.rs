//! # Forwarding Engine
//!
//! Pure orchestration of one proxied request: resolve the backend, build
//! the outbound request, issue it, hand back the relayed response. All IO
//! goes through the outbound ports.

pub mod client_ip;
pub mod headers;
pub mod url;

pub use client_ip::resolve_client_ip;
pub use headers::filter_headers;
pub use url::build_target_url;

use crate::domain::config::ForwardConfig;
use crate::domain::error::{ForwardError, GatewayError};
use crate::domain::types::{InboundRequest, OutboundRequest, UpstreamResponse};
use crate::ports::{BackendSource, UpstreamClient};
use http::header::HeaderName;
use http::Method;
use std::sync::Arc;
use tracing::debug;

/// Builds and issues the outbound request for each inbound one.
pub struct ForwardEngine {
    backend: Arc<dyn BackendSource>,
    upstream: Arc<dyn UpstreamClient>,
    client_ip_header: HeaderName,
}

impl ForwardEngine {
    /// Create an engine. Fails if the configured client-IP header name is
    /// not a valid header name.
    pub fn new(
        config: &ForwardConfig,
        backend: Arc<dyn BackendSource>,
        upstream: Arc<dyn UpstreamClient>,
    ) -> Result<Self, GatewayError> {
        let client_ip_header = HeaderName::from_bytes(config.client_ip_header.as_bytes())
            .map_err(|e| GatewayError::Config(format!("client ip header: {e}")))?;
        Ok(Self {
            backend,
            upstream,
            client_ip_header,
        })
    }

    /// Forward one request and return the response to relay.
    ///
    /// No retry against the backend: a failure here is final for this
    /// request. Retry exists only across read endpoints inside resolution.
    pub async fn forward(&self, inbound: InboundRequest) -> Result<UpstreamResponse, ForwardError> {
        let domain = self.backend.resolve().await?;
        let url = build_target_url(&domain, &inbound.path_rest, inbound.query.as_deref());
        let client_ip = resolve_client_ip(&inbound.headers, inbound.peer_addr);
        let headers = filter_headers(&inbound.headers, &client_ip, &self.client_ip_header);

        let body = if inbound.method == Method::GET || inbound.method == Method::HEAD {
            None
        } else {
            Some(inbound.body)
        };

        debug!(method = %inbound.method, url = %url, "forwarding request");
        self.upstream
            .execute(OutboundRequest {
                method: inbound.method,
                url,
                headers,
                body,
            })
            .await
    }
}
