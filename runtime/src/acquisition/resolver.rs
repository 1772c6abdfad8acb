//! Hostname to IP resolution.

use crate::error::AnalyzeError;
use std::net::IpAddr;
use tracing::debug;

/// Resolve `host` to a single address, preferring IPv4.
///
/// The geo-IP service handles IPv4 best, so an AAAA-only answer is used
/// only when nothing else is available.
pub async fn resolve_host(host: &str) -> Result<IpAddr, AnalyzeError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
        .await
        .map_err(|e| AnalyzeError::Resolution(format!("{host} ({e})")))?
        .map(|sa| sa.ip())
        .collect();

    debug!(host, count = addrs.len(), "resolved host");

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| AnalyzeError::Resolution(host.to_string()))
}
