//! URL validation for upstream playground endpoints.
//!
//! The server forwards user snippets to whatever URLs it is configured with,
//! so those URLs are checked at startup:
//! - http or https only, and https for anything that is not loopback
//! - host must be a Go playground host or a loopback address

use std::net::IpAddr;
use url::{Host, Url};

/// Hosts allowed to receive forwarded snippets.
const ALLOWED_HOSTS: &[&str] = &["play.golang.org", "go.dev", "play.go.dev", "golang.org"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UrlValidationError {
    /// URL is malformed or cannot be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// URL uses a scheme other than http/https
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),
    /// Plain http to a non-loopback host
    #[error("Only HTTPS URLs are allowed for remote hosts")]
    NotHttps,
    /// Host is not a playground host
    #[error("Host not in allowlist: {0}")]
    HostNotAllowed(String),
}

fn is_loopback(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(d) => d.eq_ignore_ascii_case("localhost"),
        Host::Ipv4(ip) => IpAddr::V4(*ip).is_loopback(),
        Host::Ipv6(ip) => IpAddr::V6(*ip).is_loopback(),
    }
}

/// Check if a domain is in the allowlist, subdomains included.
fn is_host_allowed(host: &str) -> bool {
    let host_lower = host.to_lowercase();
    ALLOWED_HOSTS
        .iter()
        .any(|allowed| host_lower == *allowed || host_lower.ends_with(&format!(".{}", allowed)))
}

/// Validate an upstream endpoint URL.
///
/// Loopback hosts are accepted over plain http so the server can be pointed
/// at a local playground instance.
pub fn validate_upstream_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str).map_err(|e| UrlValidationError::InvalidUrl(e.to_string()))?;

    let scheme = url.scheme();
    if scheme != "https" && scheme != "http" {
        return Err(UrlValidationError::UnsupportedScheme(scheme.to_string()));
    }

    let host = url
        .host()
        .ok_or_else(|| UrlValidationError::InvalidUrl("No host in URL".to_string()))?;

    if is_loopback(&host) {
        return Ok(url);
    }

    if scheme != "https" {
        return Err(UrlValidationError::NotHttps);
    }

    let host_str = host.to_string();
    if !is_host_allowed(&host_str) {
        return Err(UrlValidationError::HostNotAllowed(host_str));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_hosts() {
        assert!(is_host_allowed("play.golang.org"));
        assert!(is_host_allowed("go.dev"));
        assert!(is_host_allowed("PLAY.GO.DEV"));
        assert!(!is_host_allowed("evil.com"));
        assert!(!is_host_allowed("play.golang.org.evil.com"));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_upstream_url("https://play.golang.org/compile").is_ok());
        assert!(validate_upstream_url("https://play.golang.org/share").is_ok());
        assert!(validate_upstream_url("https://go.dev/play/p").is_ok());
    }

    #[test]
    fn test_loopback_http_allowed() {
        assert!(validate_upstream_url("http://127.0.0.1:9999/compile").is_ok());
        assert!(validate_upstream_url("http://localhost:3999/share").is_ok());
        assert!(validate_upstream_url("http://[::1]:3999/share").is_ok());
    }

    #[test]
    fn test_rejects_http_remote() {
        let result = validate_upstream_url("http://play.golang.org/compile");
        assert_eq!(result, Err(UrlValidationError::NotHttps));
    }

    #[test]
    fn test_rejects_unknown_host() {
        let result = validate_upstream_url("https://evil.com/compile");
        assert!(matches!(result, Err(UrlValidationError::HostNotAllowed(_))));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let result = validate_upstream_url("ftp://play.golang.org/compile");
        assert!(matches!(result, Err(UrlValidationError::UnsupportedScheme(_))));
        assert!(matches!(
            validate_upstream_url("not a url"),
            Err(UrlValidationError::InvalidUrl(_))
        ));
    }
}
