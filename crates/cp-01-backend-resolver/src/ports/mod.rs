//! # Ports
//!
//! Trait seams for the resolver's external dependencies, with test doubles.

pub mod outbound;

pub use outbound::{Clock, FixedClock, MockRpcTransport, RpcTransport};
