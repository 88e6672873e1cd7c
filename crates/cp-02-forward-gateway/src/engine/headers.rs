//! # Outbound Header Construction
//!
//! Copies the inbound headers, drops the entries that belong to the inbound
//! hop, and adds the client-IP header.
//!
//! The stripped set is fixed: `host` and `origin` would name the proxy
//! instead of the backend; the encoding and length headers describe the
//! inbound transfer, not the one reqwest is about to make (`content-length`
//! in particular is dropped, never recomputed from the inbound value);
//! `connection` is hop-by-hop.

use http::header::{
    HeaderName, ACCEPT_ENCODING, CONNECTION, CONTENT_ENCODING, CONTENT_LENGTH, HOST, ORIGIN,
};
use http::{HeaderMap, HeaderValue};

const STRIPPED: [HeaderName; 6] = [
    HOST,
    ORIGIN,
    ACCEPT_ENCODING,
    CONTENT_ENCODING,
    CONTENT_LENGTH,
    CONNECTION,
];

/// Derive the outbound header set from the inbound one.
pub fn filter_headers(
    inbound: &HeaderMap,
    client_ip: &str,
    client_ip_header: &HeaderName,
) -> HeaderMap {
    let mut outbound = inbound.clone();
    for name in STRIPPED {
        outbound.remove(name);
    }
    let value =
        HeaderValue::from_str(client_ip).unwrap_or_else(|_| HeaderValue::from_static(""));
    outbound.insert(client_ip_header.clone(), value);
    outbound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip_header() -> HeaderName {
        HeaderName::from_static("x-dfkjldifjlifjd")
    }

    #[test]
    fn test_strip_set_removed_everything_else_kept() {
        let mut inbound = HeaderMap::new();
        inbound.insert("host", HeaderValue::from_static("proxy.example"));
        inbound.insert("origin", HeaderValue::from_static("https://site.example"));
        inbound.insert("accept-encoding", HeaderValue::from_static("gzip"));
        inbound.insert("content-encoding", HeaderValue::from_static("br"));
        inbound.insert("content-length", HeaderValue::from_static("999"));
        inbound.insert("connection", HeaderValue::from_static("keep-alive"));
        inbound.insert("accept", HeaderValue::from_static("application/json"));
        inbound.insert("user-agent", HeaderValue::from_static("curl/8.0"));
        inbound.insert("cookie", HeaderValue::from_static("session=abc"));

        let outbound = filter_headers(&inbound, "198.51.100.1", &ip_header());

        for name in STRIPPED {
            assert!(!outbound.contains_key(&name), "{name} should be stripped");
        }
        assert_eq!(outbound.get("accept").unwrap(), "application/json");
        assert_eq!(outbound.get("user-agent").unwrap(), "curl/8.0");
        assert_eq!(outbound.get("cookie").unwrap(), "session=abc");
        assert_eq!(outbound.get(ip_header()).unwrap(), "198.51.100.1");
        // strip set (6) out, client-ip header in
        assert_eq!(outbound.len(), 4);
    }

    #[test]
    fn test_stale_content_length_not_recomputed() {
        let mut inbound = HeaderMap::new();
        inbound.insert("content-length", HeaderValue::from_static("3"));
        let outbound = filter_headers(&inbound, "1.2.3.4", &ip_header());
        assert!(!outbound.contains_key(CONTENT_LENGTH));
    }

    #[test]
    fn test_multi_value_headers_survive() {
        let mut inbound = HeaderMap::new();
        inbound.append("x-custom", HeaderValue::from_static("one"));
        inbound.append("x-custom", HeaderValue::from_static("two"));
        let outbound = filter_headers(&inbound, "1.2.3.4", &ip_header());
        let values: Vec<_> = outbound.get_all("x-custom").iter().collect();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_unknown_client_ip_still_sets_header() {
        let outbound = filter_headers(&HeaderMap::new(), "", &ip_header());
        assert_eq!(outbound.get(ip_header()).unwrap(), "");
    }
}
