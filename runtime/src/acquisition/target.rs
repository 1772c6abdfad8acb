//! Normalize user-supplied URLs and domains before touching the network.

use crate::error::AnalyzeError;
use std::net::IpAddr;
use url::{Host, Url};

/// Whether `input` starts with an explicit `scheme:`.
///
/// `example.com:8080` is a host and port, not a scheme, and anything with a
/// `/`, `?` or `#` before the first colon has no scheme at all.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.starts_with(|c: char| c.is_ascii_digit())
}

/// Turn user input into an absolute http(s) URL.
///
/// Input without a scheme is assumed to be `https://`.
pub fn normalize_url(input: &str) -> Result<Url, AnalyzeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::InvalidUrl("empty URL".to_string()));
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| AnalyzeError::InvalidUrl(format!("{trimmed} ({e})")))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(AnalyzeError::InvalidUrl(trimmed.to_string())),
    }
}

/// Reduce a domain field to a bare host.
///
/// Accepts `example.com`, `example.com:8080`, IP literals (IPv6 bracketed
/// or not), or a full URL. IP hosts come back in canonical form.
pub fn normalize_domain(input: &str) -> Result<String, AnalyzeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::InvalidUrl("empty domain".to_string()));
    }

    let scheme = has_scheme(trimmed);
    if !scheme {
        let head = trimmed.split(['/', '?', '#']).next().unwrap_or(trimmed);
        if let Ok(ip) = head.parse::<IpAddr>() {
            return Ok(ip.to_string());
        }
    }

    let candidate = if scheme {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let url = Url::parse(&candidate)
        .map_err(|e| AnalyzeError::InvalidUrl(format!("{trimmed} ({e})")))?;

    match url.host() {
        Some(Host::Domain(d)) if !d.is_empty() => Ok(d.to_lowercase()),
        Some(Host::Ipv4(ip)) => Ok(ip.to_string()),
        Some(Host::Ipv6(ip)) => Ok(ip.to_string()),
        _ => Err(AnalyzeError::InvalidUrl(trimmed.to_string())),
    }
}
