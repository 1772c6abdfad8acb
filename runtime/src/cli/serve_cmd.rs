//! `seo-audit-api serve` — run the HTTP API.

use crate::config::ServiceConfig;
use crate::server;
use anyhow::Result;
use tracing::info;

/// Run the serve command.
pub async fn run(config: &ServiceConfig) -> Result<()> {
    info!("starting seo-audit-api v{}", env!("CARGO_PKG_VERSION"));
    server::serve(config).await
}
