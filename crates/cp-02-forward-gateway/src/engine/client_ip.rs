//! # Client IP Resolution
//!
//! The proxy sits behind edge infrastructure, so the transport peer is
//! rarely the real caller. Precedence: edge-set real-IP header, then the
//! first hop of `x-forwarded-for`, then `x-real-ip`, then the raw peer
//! address. First present value wins, verbatim.

use http::HeaderMap;
use std::net::SocketAddr;

/// Resolve the caller's IP from headers, falling back to the transport
/// peer. Returns an empty string when nothing is known.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(value) = header_str(headers, "cf-connecting-ip") {
        return value.trim().to_string();
    }
    if let Some(value) = header_str(headers, "x-forwarded-for") {
        if let Some(first) = value.split(',').next() {
            return first.trim().to_string();
        }
    }
    if let Some(value) = header_str(headers, "x-real-ip") {
        return value.trim().to_string();
    }
    peer.map(|addr| addr.ip().to_string()).unwrap_or_default()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
