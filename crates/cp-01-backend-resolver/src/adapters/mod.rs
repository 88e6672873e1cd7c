//! # Adapters
//!
//! Production implementations of the outbound ports.

pub mod clock;
pub mod http_rpc;

pub use clock::SystemClock;
pub use http_rpc::HttpRpcTransport;
