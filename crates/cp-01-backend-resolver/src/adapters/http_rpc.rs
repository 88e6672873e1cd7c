//! # HTTP JSON-RPC Transport
//!
//! reqwest-backed implementation of the [`RpcTransport`] port: one POST with
//! a JSON body per contract read. No retry here; fallback across endpoints
//! is the application service's job.

use crate::domain::{JsonRpcRequest, JsonRpcResponse, RpcTransportError};
use crate::ports::RpcTransport;
use async_trait::async_trait;

/// JSON-over-HTTP transport for public read endpoints.
#[derive(Debug, Clone, Default)]
pub struct HttpRpcTransport {
    client: reqwest::Client,
}

impl HttpRpcTransport {
    /// Create a transport with the default client (default pool and
    /// transport-level timeouts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn execute(
        &self,
        endpoint: &str,
        request: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, RpcTransportError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RpcTransportError::Http(e.to_string()))?;

        response
            .json::<JsonRpcResponse>()
            .await
            .map_err(|e| RpcTransportError::InvalidResponse(e.to_string()))
    }
}
