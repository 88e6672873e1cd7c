//! # CP-01 Backend Resolver
//!
//! Discovers the current backend domain of the proxy by reading a single
//! value from a public smart contract.
//!
//! ## Purpose
//!
//! The proxy never hardcodes its upstream host. Operators publish the
//! current domain in contract storage; every proxy instance reads it through
//! ordinary `eth_call` requests against a list of public read endpoints and
//! caches the result for a bounded interval. Moving the backend is a single
//! on-chain write, with no redeploy of the proxy fleet.
//!
//! ## Resolution pass
//!
//! 1. Serve from the cache slot while the entry is younger than the TTL.
//! 2. Otherwise try each configured read endpoint in order: issue the
//!    contract call, decode the returned ABI string, accept the first
//!    non-empty domain and overwrite the cache.
//! 3. If no endpoint yields a usable domain, the pass fails hard; the stale
//!    cache entry is never served as a fallback.
//!
//! ## Module Structure
//!
//! ```text
//! cp-01-backend-resolver/
//! ├── domain/          # ResolvedBackend, JSON-RPC envelopes, errors
//! ├── algorithms/      # ABI dynamic-string decoding
//! ├── ports/           # RpcTransport + Clock traits (with test doubles)
//! ├── adapters/        # reqwest transport, system clock
//! ├── application/     # BackendResolver orchestrating cache + fallback
//! └── config.rs        # ResolverConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{HttpRpcTransport, SystemClock};
pub use algorithms::decode_abi_string;
pub use application::BackendResolver;
pub use config::ResolverConfig;
pub use domain::{
    AbiDecodeError, ContractCallSpec, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ResolveError, ResolvedBackend, RpcTransportError,
};
pub use ports::{Clock, FixedClock, MockRpcTransport, RpcTransport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
