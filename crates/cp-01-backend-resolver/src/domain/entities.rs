//! # Domain Entities
//!
//! Resolved backend state and the JSON-RPC wire envelopes used to read it.

use serde::{Deserialize, Serialize};

/// A successfully resolved backend domain together with the instant it was
/// resolved. Immutable once created; re-resolution replaces the value
/// wholesale in the resolver's single cache slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBackend {
    /// The backend domain, e.g. `https://example.org`.
    pub domain: String,
    /// Resolution instant, milliseconds since the Unix epoch.
    pub resolved_at_millis: u64,
}

impl ResolvedBackend {
    /// Whether this entry is still fresh at `now` for the given TTL.
    pub fn is_fresh(&self, now_millis: u64, ttl_millis: u64) -> bool {
        now_millis.saturating_sub(self.resolved_at_millis) < ttl_millis
    }
}

/// Identifies which on-chain value to read: a contract address plus the
/// 4-byte selector of the read function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCallSpec {
    /// Contract address, `0x`-prefixed.
    pub contract_address: String,
    /// 4-byte function selector as 8 hex characters, no `0x` prefix.
    pub function_selector: String,
}

impl ContractCallSpec {
    /// The `data` field of the call: the selector with a `0x` prefix.
    pub fn call_data(&self) -> String {
        format!("0x{}", self.function_selector)
    }
}

/// Outbound JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Always `"2.0"`.
    pub jsonrpc: String,
    /// Request id. The resolver issues one request at a time, so a fixed id
    /// is sufficient.
    pub id: u64,
    /// Method name, e.g. `eth_call`.
    pub method: String,
    /// Positional parameters.
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    /// Build an `eth_call` request for the given contract read, against the
    /// latest block state.
    pub fn eth_call(spec: &ContractCallSpec) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: "eth_call".to_string(),
            params: serde_json::json!([
                {
                    "to": spec.contract_address,
                    "data": spec.call_data(),
                },
                "latest",
            ]),
        }
    }
}

/// Inbound JSON-RPC 2.0 response envelope. Exactly one of `result` and
/// `error` is expected to be present.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    /// Hex-encoded call return data on success.
    pub result: Option<String>,
    /// Error object on failure.
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

impl JsonRpcResponse {
    /// Extract the hex result, treating an `error` field or a missing
    /// `result` as a failed read.
    pub fn into_result(self) -> Result<String, super::errors::RpcTransportError> {
        use super::errors::RpcTransportError;
        if let Some(err) = self.error {
            return Err(RpcTransportError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| RpcTransportError::InvalidResponse("missing result field".to_string()))
    }
}
