//! Single-shot page fetcher.
//!
//! A `PageFetcher` wraps one pooled `reqwest::Client` configured with the
//! fetch timeout, the audit user agent, and the certificate policy. Each
//! call issues exactly one GET; there are no retries.

use crate::config::ServiceConfig;
use crate::error::AnalyzeError;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

/// Raw result of fetching a page.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Response body decoded as text.
    pub html: String,
    /// Size of the body as received, before decoding.
    pub content_length: usize,
    /// HTTP status code (always 200 for a successful fetch).
    pub status: u16,
    /// Time from sending the request to reading the full body.
    pub elapsed_ms: u64,
}

/// Fetches pages for analysis.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build a fetcher from service configuration.
    pub fn new(config: &ServiceConfig) -> Result<Self, AnalyzeError> {
        if config.accept_invalid_certs {
            warn!("TLS certificate validation is DISABLED for page fetches");
        }

        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| AnalyzeError::Internal(format!("building HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET `url` and return its body, status and timing.
    ///
    /// Anything other than a 200 is an error; the body of a failed
    /// response is never returned.
    pub async fn fetch(&self, url: &Url) -> Result<FetchResult, AnalyzeError> {
        let start = Instant::now();

        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, "fetch failed: {e}");
            AnalyzeError::from(e)
        })?;

        let status = resp.status().as_u16();
        if status != 200 {
            warn!(%url, status, "fetch returned non-200 status");
            return Err(AnalyzeError::Status(status));
        }

        let charset = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_from_content_type);

        let body = resp.bytes().await?;
        let html = decode_body(&body, charset.as_deref());
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(%url, status, elapsed_ms, bytes = body.len(), charset = ?charset, "fetched page");

        Ok(FetchResult {
            html,
            content_length: body.len(),
            status,
            elapsed_ms,
        })
    }
}

/// The `charset` parameter of a `Content-Type` value, if any.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Decode `body` with the labelled encoding, falling back to UTF-8.
///
/// A byte order mark overrides the label.
pub fn decode_body(body: &[u8], charset: Option<&str>) -> String {
    let encoding = charset
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_with_timeout(timeout: Duration) -> PageFetcher {
        let config = ServiceConfig {
            fetch_timeout: timeout,
            ..ServiceConfig::default()
        };
        PageFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();
        let result = fetcher.fetch(&url).await.unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(result.html, "<html></html>");
        assert_eq!(result.content_length, 13);
    }

    #[tokio::test]
    async fn test_fetch_decodes_declared_charset() {
        // "Caf\xE9" is "Café" in ISO-8859-1 and invalid as UTF-8.
        let body: Vec<u8> = b"<html><title>Caf\xE9 Paris</title></html>".to_vec();
        let raw_len = body.len();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let url = Url::parse(&server.uri()).unwrap();
        let result = fetcher.fetch(&url).await.unwrap();

        assert_eq!(result.html, "<html><title>Café Paris</title></html>");
        // Raw size, not the re-encoded UTF-8 size.
        assert_eq!(result.content_length, raw_len);
        assert_eq!(result.html.len(), raw_len + 1);
    }

    #[test]
    fn test_charset_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=ISO-8859-1").as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(
            charset_from_content_type("text/html;Charset=\"utf-8\"").as_deref(),
            Some("utf-8")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }

    #[test]
    fn test_decode_body_fallbacks() {
        assert_eq!(decode_body(b"caf\xe9", Some("windows-1252")), "café");
        assert_eq!(decode_body("café".as_bytes(), None), "café");
        assert_eq!(decode_body("café".as_bytes(), Some("no-such-charset")), "café");
        assert_eq!(decode_body(b"caf\xe9", None), "caf\u{FFFD}");
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let url = Url::parse(&server.uri()).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, AnalyzeError::Status(404)));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_millis(50));
        let url = Url::parse(&server.uri()).unwrap();
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert!(matches!(err, AnalyzeError::Fetch(_)));
        assert!(err.is_client_error());
    }
}
