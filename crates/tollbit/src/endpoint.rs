//! Gateway endpoints, header names, and URL normalization.

/// Base URL for authenticated content lookups.
pub const CONTENT_BASE: &str = "https://api.tollbit.com/dev/v1/content/";

/// Base URL for unauthenticated rate lookups.
pub const RATE_BASE: &str = "https://api.tollbit.com/dev/v1/rate/";

/// Header carrying the organization cuid on content lookups.
pub const HEADER_ORG_CUID: &str = "TollbitOrgCuid";

/// Header carrying the raw token string on content lookups.
pub const HEADER_TOKEN: &str = "TollbitToken";

/// Standard user-agent header name.
pub const HEADER_USER_AGENT: &str = "User-Agent";

/// Normalize a target URL for embedding in a gateway endpoint.
///
/// Strips one leading `http://` or `https://` (case-sensitive, anchored at
/// the start), then one leading `www.` from what remains. Each prefix is
/// stripped at most once; everything after passes through verbatim.
pub fn normalize_url(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// The content endpoint for a target URL.
pub fn content_endpoint(target_url: &str) -> String {
    format!("{CONTENT_BASE}{}", normalize_url(target_url))
}

/// The rate endpoint for a target URL.
pub fn rate_endpoint(target_url: &str) -> String {
    format!("{RATE_BASE}{}", normalize_url(target_url))
}

/// Synthesize the bot user-agent for a client agent name.
pub fn user_agent(agent: &str) -> String {
    format!("Mozilla/5.0 (compatible; {agent}; +https://tollbit.com/bot)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_variants() {
        for url in [
            "https://www.example.com/a",
            "http://example.com/a",
            "www.example.com/a",
            "example.com/a",
        ] {
            assert_eq!(normalize_url(url), "example.com/a", "input: {url}");
        }
    }

    #[test]
    fn test_normalize_strips_each_prefix_once() {
        // Only the outermost scheme is stripped.
        assert_eq!(
            normalize_url("https://http://example.com"),
            "http://example.com"
        );
        // www. inside the path is untouched.
        assert_eq!(normalize_url("example.com/www.a"), "example.com/www.a");
        // A second www. label survives.
        assert_eq!(normalize_url("www.www.example.com"), "www.example.com");
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        assert_eq!(normalize_url("HTTPS://example.com"), "HTTPS://example.com");
        assert_eq!(normalize_url("WWW.example.com"), "WWW.example.com");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            content_endpoint("https://www.example.com/a"),
            "https://api.tollbit.com/dev/v1/content/example.com/a"
        );
        assert_eq!(
            rate_endpoint("http://example.com/a"),
            "https://api.tollbit.com/dev/v1/rate/example.com/a"
        );
    }

    #[test]
    fn test_user_agent_embeds_agent() {
        assert_eq!(
            user_agent("newsreader"),
            "Mozilla/5.0 (compatible; newsreader; +https://tollbit.com/bot)"
        );
    }
}
