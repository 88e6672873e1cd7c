//! # Reqwest Upstream Client
//!
//! The production outbound hop. Redirects are followed automatically
//! (reqwest's default policy); no explicit timeout is layered on top of the
//! transport defaults, so a hung upstream holds its inbound request open.

use crate::domain::error::ForwardError;
use crate::domain::types::{OutboundRequest, UpstreamResponse};
use crate::ports::UpstreamClient;
use async_trait::async_trait;
use http::header::CONTENT_TYPE;

/// [`UpstreamClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
}

impl ReqwestUpstreamClient {
    /// Create a client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing `reqwest::Client` (shared pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn execute(&self, request: OutboundRequest) -> Result<UpstreamResponse, ForwardError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ForwardError::Upstream(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get(CONTENT_TYPE).cloned();
        let body = response
            .bytes()
            .await
            .map_err(|e| ForwardError::Upstream(e.to_string()))?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
