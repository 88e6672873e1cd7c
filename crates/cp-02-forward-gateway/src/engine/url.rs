//! # Target URL Construction
//!
//! Pure assembly of the outbound URL from the resolved domain and the
//! inbound path/query.

/// Build the outbound URL: domain (one trailing slash stripped) + `/` +
/// path remainder (when present) + `?` + query (when present).
///
/// The path remainder and query are passed through byte-for-byte; the proxy
/// neither normalizes nor re-encodes what the client sent.
pub fn build_target_url(domain: &str, path_rest: &str, query: Option<&str>) -> String {
    let base = domain.strip_suffix('/').unwrap_or(domain);
    let mut url = String::with_capacity(
        base.len() + path_rest.len() + query.map_or(0, |q| q.len() + 1) + 1,
    );
    url.push_str(base);
    if !path_rest.is_empty() {
        url.push('/');
        url.push_str(path_rest);
    }
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_path_and_query() {
        assert_eq!(
            build_target_url("https://example.org/", "foo/bar", Some("x=1")),
            "https://example.org/foo/bar?x=1"
        );
    }

    #[test]
    fn test_bare_domain_without_remainder() {
        assert_eq!(
            build_target_url("https://example.org", "", None),
            "https://example.org"
        );
    }

    #[test]
    fn test_strips_single_trailing_slash() {
        assert_eq!(
            build_target_url("https://example.org//", "a", None),
            "https://example.org//a"
        );
        assert_eq!(
            build_target_url("https://example.org/", "a", None),
            "https://example.org/a"
        );
    }

    #[test]
    fn test_query_without_path() {
        assert_eq!(
            build_target_url("https://example.org", "", Some("a=1&b=2")),
            "https://example.org?a=1&b=2"
        );
    }

    #[test]
    fn test_empty_query_keeps_question_mark() {
        assert_eq!(
            build_target_url("https://example.org", "p", Some("")),
            "https://example.org/p?"
        );
    }
}
