//! Shared helpers: boot the API on an ephemeral port.

use seo_audit::server::{serve_on, AppState};
use seo_audit::ServiceConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A running API instance.
pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        fetch_timeout: Duration::from_secs(2),
        ..ServiceConfig::default()
    }
}

pub async fn spawn_app(config: ServiceConfig) -> TestApp {
    let state = Arc::new(AppState::new(&config).expect("state"));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(serve_on(listener, state, std::future::pending()));

    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

/// A page that passes every rule except HTTPS when served over plain http.
pub const GOOD_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Handmade Ceramic Mugs and Bowls Shop</title>
  <meta name="description" content="Small batch stoneware, fired in our own kiln.">
</head>
<body>
  <h1>Handmade Ceramics</h1>
  <h2>Mugs</h2>
  <h2>Bowls</h2>
  <img src="/mug.jpg" alt="Blue mug">
  <a href="/mugs">Mugs</a>
  <a href="/bowls">Bowls</a>
  <a href="about.html">About</a>
  <a href="https://instagram.com/ceramics">Instagram</a>
  <a href="#top">Back to top</a>
</body>
</html>"##;
