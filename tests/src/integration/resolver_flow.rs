//! Resolution against the real wire codec: JSON-RPC envelopes in, ABI
//! payloads out, cache and fallback in between.

use super::{encode_domain, scripted_resolver};
use cp_01_backend_resolver::{FixedClock, MockRpcTransport, ResolveError};
use std::sync::Arc;

const TTL_MILLIS: u64 = 60_000;

#[tokio::test]
async fn test_cached_lookups_within_ttl_hit_no_endpoint() {
    let transport = Arc::new(MockRpcTransport::new());
    let clock = Arc::new(FixedClock::at(10_000));
    transport.push_result(&encode_domain("https://example.org"));

    let resolver = scripted_resolver(Arc::clone(&transport), Arc::clone(&clock));

    for _ in 0..50 {
        clock.advance(1_000);
        assert_eq!(resolver.resolve().await.unwrap(), "https://example.org");
    }
    // 50 seconds of traffic, one upstream read.
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_expiry_triggers_exactly_one_pass_in_order() {
    let transport = Arc::new(MockRpcTransport::new());
    let clock = Arc::new(FixedClock::at(10_000));
    transport.push_result(&encode_domain("https://example.org"));
    transport.push_http_error("connection refused");
    transport.push_result(&encode_domain("https://moved.example.org"));

    let resolver = scripted_resolver(Arc::clone(&transport), Arc::clone(&clock));
    assert_eq!(resolver.resolve().await.unwrap(), "https://example.org");

    clock.advance(TTL_MILLIS);
    assert_eq!(
        resolver.resolve().await.unwrap(),
        "https://moved.example.org"
    );
    assert_eq!(
        transport.calls(),
        vec![
            "https://rpc.one".to_string(),
            "https://rpc.one".to_string(),
            "https://rpc.two".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_nul_padded_registry_value_is_truncated() {
    let transport = Arc::new(MockRpcTransport::new());
    let clock = Arc::new(FixedClock::at(10_000));
    // Registry slot wider than the value: declared length 32, NUL-padded.
    let mut padded = String::from("https://example.org");
    padded.push('\0');
    padded.push_str("garbage after nul");
    transport.push_result(&encode_domain(&padded));

    let resolver = scripted_resolver(transport, clock);
    assert_eq!(resolver.resolve().await.unwrap(), "https://example.org");
}

#[tokio::test]
async fn test_all_endpoints_erroring_is_a_hard_failure() {
    let transport = Arc::new(MockRpcTransport::new());
    let clock = Arc::new(FixedClock::at(10_000));
    transport.push_rpc_error(-32005, "rate limited");
    transport.push_rpc_error(-32000, "header not found");

    let resolver = scripted_resolver(transport, clock);
    assert_eq!(
        resolver.resolve().await.unwrap_err(),
        ResolveError::NoDomainAvailable
    );
}
