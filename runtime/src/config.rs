//! Service configuration shared by the fetcher, geo locator, and server.

use std::time::Duration;

/// Default listening port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Default outbound fetch timeout.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every page fetch.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SEOAuditBot/1.0; +https://github.com/seo-audit/seo-audit-api)";

/// Base URL of the geo-IP lookup service.
pub const DEFAULT_GEO_API_URL: &str = "http://ip-api.com";

/// Immutable runtime configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Hard timeout for the page fetch, connect included.
    pub fetch_timeout: Duration,
    /// User agent for page fetches.
    pub user_agent: String,
    /// Skip TLS certificate validation on page fetches.
    ///
    /// Lets the service audit sites with self-signed or expired
    /// certificates, at the cost of trusting whatever answers. Off unless
    /// explicitly enabled.
    pub accept_invalid_certs: bool,
    /// Base URL of the geo-IP API (`{base}/json/{ip}`).
    pub geo_api_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
            geo_api_url: DEFAULT_GEO_API_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// `host:port` the server binds to. Hostnames are resolved at bind time.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let config = ServiceConfig {
            host: "::".to_string(),
            port: 9000,
            ..ServiceConfig::default()
        };
        assert_eq!(config.bind_addr(), "[::]:9000");
    }
}
