//! # Ports
//!
//! Trait seams for the gateway's external dependencies, with test doubles.

pub mod outbound;

pub use outbound::{BackendSource, MockBackendSource, MockUpstreamClient, UpstreamClient};
