//! Error taxonomy for the analyzer and the ancillary heuristics.

use thiserror::Error;

/// Everything that can abort an analysis, geolocation, or estimate.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The submitted URL or domain is unusable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The outbound request could not complete (DNS, connect, TLS, timeout).
    #[error("Failed to fetch URL: {0}")]
    Fetch(String),

    /// The page answered with something other than 200.
    #[error("Failed to fetch URL: HTTP {0}")]
    Status(u16),

    /// The domain did not resolve to any address.
    #[error("Could not resolve domain: {0}")]
    Resolution(String),

    /// The geo-IP service failed or refused the lookup.
    #[error("Geolocation lookup failed: {0}")]
    GeoLookup(String),

    /// Anything else, e.g. a panicked parse task.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyzeError {
    /// Whether the caller is at fault (maps to 400) or we are (500).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzeError::InvalidUrl(_)
                | AnalyzeError::Fetch(_)
                | AnalyzeError::Status(_)
                | AnalyzeError::Resolution(_)
        )
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AnalyzeError::Fetch(format!("request timed out ({e})"))
        } else {
            AnalyzeError::Fetch(e.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for AnalyzeError {
    fn from(e: tokio::task::JoinError) -> Self {
        AnalyzeError::Internal(format!("extraction task failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_vs_server_errors() {
        assert!(AnalyzeError::Fetch("dns".into()).is_client_error());
        assert!(AnalyzeError::Status(404).is_client_error());
        assert!(AnalyzeError::Resolution("nope.invalid".into()).is_client_error());
        assert!(AnalyzeError::InvalidUrl("ftp://x".into()).is_client_error());
        assert!(!AnalyzeError::GeoLookup("fail".into()).is_client_error());
        assert!(!AnalyzeError::Internal("boom".into()).is_client_error());
    }

    #[test]
    fn test_messages_carry_cause() {
        assert_eq!(
            AnalyzeError::Status(503).to_string(),
            "Failed to fetch URL: HTTP 503"
        );
        assert_eq!(
            AnalyzeError::Resolution("nope.invalid".into()).to_string(),
            "Could not resolve domain: nope.invalid"
        );
    }
}
