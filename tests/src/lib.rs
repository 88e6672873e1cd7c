//! # ChainProxy Test Suite
//!
//! Unified test crate for cross-subsystem scenarios: the real resolver and
//! the real gateway wired together, driven through the public router with
//! scripted transports. No sockets, no network.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── resolver_flow.rs   # cache, TTL, endpoint fallback against the wire codec
//!     └── gateway_flow.rs    # full requests through the router, end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cp-tests
//! ```

#[cfg(test)]
mod integration;
