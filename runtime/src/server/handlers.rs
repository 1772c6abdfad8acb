//! Route handlers.

use super::error::{ApiError, ApiResult};
use super::extract::ApiJson;
use super::{AppState, SERVICE_NAME};
use crate::audit::report::AuditReport;
use crate::geo::GeoReport;
use crate::traffic::{estimate_from_page, TrafficEstimate};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DomainRequest {
    pub domain: String,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "SEO Audit Tool API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/seo/analyze",
            "/api/geo/analyze",
            "/api/traffic/estimate"
        ]
    }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}

/// POST /api/seo/analyze
#[instrument(skip_all, fields(url = %req.url, request_id = %Uuid::new_v4()))]
pub async fn analyze_seo(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UrlRequest>,
) -> ApiResult<AuditReport> {
    info!("analyzing page");
    let report = state.analyzer.analyze(&req.url).await?;
    Ok(Json(report))
}

/// POST /api/geo/analyze
#[instrument(skip_all, fields(domain = %req.domain, request_id = %Uuid::new_v4()))]
pub async fn analyze_geo(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<DomainRequest>,
) -> ApiResult<GeoReport> {
    info!("geolocating domain");
    let report = state.geo.locate(&req.domain).await?;
    Ok(Json(report))
}

/// POST /api/traffic/estimate
///
/// Unlike analysis, every failure here is a 500.
#[instrument(skip_all, fields(url = %req.url, request_id = %Uuid::new_v4()))]
pub async fn estimate_traffic(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UrlRequest>,
) -> ApiResult<TrafficEstimate> {
    info!("estimating traffic");
    let page = state
        .analyzer
        .analyze_page(&req.url)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(estimate_from_page(&page)))
}
