//! # Gateway Errors
//!
//! Two levels, kept apart on purpose: `ForwardError` is per-request and is
//! rendered into the plain-text 500 surface at the handler boundary;
//! `GatewayError` is server-level and only ever surfaces during startup.

use cp_01_backend_resolver::ResolveError;
use thiserror::Error;

/// A single proxied request failed.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The backend domain could not be resolved.
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// The outbound request to the backend failed (connect, transfer, or a
    /// drop mid-body; all treated alike).
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Gateway-level errors (startup and configuration, never per-request).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error.
    #[error("server bind error: {0}")]
    Bind(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}
