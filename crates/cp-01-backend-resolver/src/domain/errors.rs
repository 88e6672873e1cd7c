//! # Domain Errors
//!
//! Error types for backend resolution.
//!
//! Per-endpoint failures (`RpcTransportError`, `AbiDecodeError`) stay inside
//! a resolution pass: they cause fallback to the next endpoint and are only
//! logged. `ResolveError` is the hard failure surfaced to callers when the
//! whole pass yields nothing.

use thiserror::Error;

/// Resolution failed: no configured endpoint yielded a usable domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Every endpoint failed or returned an empty string. The previous
    /// cached value is never served in this case.
    #[error("no domain available")]
    NoDomainAvailable,
}

/// A single endpoint read failed.
#[derive(Debug, Error)]
pub enum RpcTransportError {
    /// Network or HTTP-level failure.
    #[error("transport failure: {0}")]
    Http(String),

    /// The endpoint answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },

    /// The endpoint answered 200 but the body was not a usable JSON-RPC
    /// response.
    #[error("invalid rpc response: {0}")]
    InvalidResponse(String),
}

/// The hex return payload could not be decoded as an ABI string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiDecodeError {
    /// Non-hex characters where hex was expected.
    #[error("invalid hex in call result: {0}")]
    InvalidHex(String),
}
