//! Cross-subsystem integration scenarios.

mod gateway_flow;
mod resolver_flow;

use cp_01_backend_resolver::{BackendResolver, FixedClock, MockRpcTransport, ResolverConfig};
use std::sync::Arc;

/// ABI-encode a domain the way the registry contract returns it: offset
/// word, length word, payload, zero padding.
pub fn encode_domain(domain: &str) -> String {
    let mut payload = String::from("0x");
    payload.push_str(&format!("{:064x}", 0x20));
    payload.push_str(&format!("{:064x}", domain.len()));
    payload.push_str(&hex::encode(domain.as_bytes()));
    let padding = (64 - (domain.len() * 2) % 64) % 64;
    payload.push_str(&"0".repeat(padding));
    payload
}

/// A resolver over two scripted endpoints and a fixed clock.
pub fn scripted_resolver(
    transport: Arc<MockRpcTransport>,
    clock: Arc<FixedClock>,
) -> BackendResolver {
    let config = ResolverConfig {
        endpoints: vec![
            "https://rpc.one".to_string(),
            "https://rpc.two".to_string(),
        ],
        ..ResolverConfig::for_testing()
    };
    BackendResolver::new(config, transport, clock)
}
