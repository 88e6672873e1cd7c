//! # Outbound Ports
//!
//! Traits for the resolver's external dependencies: the JSON-RPC transport
//! and the clock. Both are injected so resolution is deterministic under
//! test; the doubles live here next to the traits so the unified test suite
//! can use them without its own scaffolding.

use crate::domain::{JsonRpcRequest, JsonRpcResponse, RpcTransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// JSON-RPC transport - outbound port.
///
/// One call against one endpoint URL. Endpoint iteration and fallback are
/// the application service's concern, not the transport's.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Execute a single JSON-RPC request against `endpoint`.
    async fn execute(
        &self,
        endpoint: &str,
        request: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, RpcTransportError>;
}

/// Time source - outbound port.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Scripted transport for tests: pops one canned outcome per call and
/// records the endpoints hit, in order.
#[derive(Default)]
pub struct MockRpcTransport {
    responses: Mutex<VecDeque<Result<JsonRpcResponse, RpcTransportError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockRpcTransport {
    /// Create an empty mock; every call fails until outcomes are pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next call.
    pub fn push(&self, outcome: Result<JsonRpcResponse, RpcTransportError>) {
        self.responses.lock().push_back(outcome);
    }

    /// Queue a successful response carrying `result` as the hex payload.
    pub fn push_result(&self, result: &str) {
        self.push(Ok(JsonRpcResponse {
            result: Some(result.to_string()),
            error: None,
        }));
    }

    /// Queue a transport-level failure.
    pub fn push_http_error(&self, message: &str) {
        self.push(Err(RpcTransportError::Http(message.to_string())));
    }

    /// Queue a JSON-RPC error response.
    pub fn push_rpc_error(&self, code: i64, message: &str) {
        self.push(Ok(JsonRpcResponse {
            result: None,
            error: Some(crate::domain::JsonRpcError {
                code,
                message: message.to_string(),
            }),
        }));
    }

    /// Endpoints hit so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RpcTransport for MockRpcTransport {
    async fn execute(
        &self,
        endpoint: &str,
        _request: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, RpcTransportError> {
        self.calls.lock().push(endpoint.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RpcTransportError::Http("mock exhausted".to_string())))
    }
}

/// Manually advanced clock for tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicU64,
}

impl FixedClock {
    /// Create a clock pinned at `millis`.
    pub fn at(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, delta_millis: u64) {
        self.millis.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
