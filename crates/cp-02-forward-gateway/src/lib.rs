//! # CP-02 Forward Gateway
//!
//! The public surface of the proxy: receives any HTTP request under the
//! configured entry path, asks the backend resolver for the current
//! upstream domain, and replays the request there.
//!
//! ## Request flow
//!
//! ```text
//! inbound ── CORS layer ──► proxy handler ──► ForwardEngine
//!               │                                  │
//!               └── OPTIONS answered locally       ├─► BackendSource (cp-01)
//!                   with 204, no resolution        └─► UpstreamClient (reqwest)
//! ```
//!
//! The engine rebuilds the outbound request from the inbound one: same
//! method, same path remainder and query string, headers minus the
//! transport-specific set, plus one header carrying the caller's resolved
//! IP. The upstream response is relayed with its status and content type;
//! any failure surfaces as a plain 500 at the handler boundary.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod handler;
pub mod middleware;
pub mod ports;
pub mod service;

// Re-exports for public API
pub use adapters::{OnChainBackendSource, ReqwestUpstreamClient};
pub use domain::config::{ForwardConfig, GatewayConfig, HttpConfig, RouteConfig};
pub use domain::error::{ForwardError, GatewayError};
pub use domain::types::{InboundRequest, OutboundRequest, UpstreamResponse};
pub use engine::ForwardEngine;
pub use ports::{BackendSource, MockBackendSource, MockUpstreamClient, UpstreamClient};
pub use service::ForwardGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
