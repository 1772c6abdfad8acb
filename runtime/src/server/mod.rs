//! HTTP API: router, shared state, and the serve loop.

pub mod error;
pub mod extract;
pub mod handlers;

use crate::audit::analyzer::PageAnalyzer;
use crate::config::ServiceConfig;
use crate::geo::GeoLocator;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "seo-audit-api";

/// State shared by all handlers. Immutable after startup.
pub struct AppState {
    pub analyzer: PageAnalyzer,
    pub geo: GeoLocator,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            analyzer: PageAnalyzer::new(config).context("creating page analyzer")?,
            geo: GeoLocator::new(config).context("creating geo locator")?,
        })
    }
}

/// Build the API router with open CORS.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/seo/analyze", post(handlers::analyze_seo))
        .route("/api/geo/analyze", post(handlers::analyze_geo))
        .route("/api/traffic/estimate", post(handlers::estimate_traffic))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")
}

/// Bind the configured address and serve until Ctrl-C / SIGTERM.
pub async fn serve(config: &ServiceConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on http://{addr}");
    serve_on(listener, state, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("received shutdown signal");
}
