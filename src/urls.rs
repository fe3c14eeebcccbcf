use crate::error::CrawlError;
use url::Url;

/// Parses and validates the seed URL.
///
/// Accepts only absolute http(s) URLs with a hostname; anything else is an
/// `InvalidSeedUrl`, the one error that fails a run outright.
pub fn parse_http_url(raw: &str) -> Result<Url, CrawlError> {
    let url = Url::parse(raw).map_err(|e| CrawlError::InvalidSeedUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CrawlError::InvalidSeedUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(CrawlError::InvalidSeedUrl {
            url: raw.to_string(),
            reason: "missing hostname".to_string(),
        });
    }

    Ok(url)
}

/// Parses a discovered link with the same validation rules as the seed,
/// but failures are silent: a malformed href is simply not a frontier
/// candidate.
pub fn parse_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str()?;
    Some(url)
}

/// Exact hostname equality against the seed's hostname. No case-folding or
/// www-prefix stripping beyond what URL parsing itself does; `www.example.com`
/// and `example.com` are different sites.
pub fn same_domain(url: &Url, host: &str) -> bool {
    url.host_str() == Some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_seeds() {
        assert!(parse_http_url("http://example.com").is_ok());
        assert!(parse_http_url("https://example.com/docs?page=1").is_ok());
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = parse_http_url("not-a-url").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidSeedUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(parse_http_url("ftp://example.com/file").is_err());
        assert!(parse_http_url("javascript:void(0)").is_err());
    }

    #[test]
    fn link_parsing_is_silent_on_failure() {
        assert!(parse_link("http://[::1").is_none());
        assert!(parse_link("mailto:someone@example.com").is_none());
        assert!(parse_link("https://example.com/a").is_some());
    }

    #[test]
    fn same_domain_is_exact_hostname_equality() {
        let url = Url::parse("https://example.com/page").unwrap();
        assert!(same_domain(&url, "example.com"));
        assert!(!same_domain(&url, "www.example.com"));
        assert!(!same_domain(&url, "other.com"));
    }
}
