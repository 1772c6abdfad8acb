//! Resolve a domain and look its address up in a geo-IP service.
//!
//! The service is expected to speak the ip-api.com JSON shape:
//! `GET {base}/json/{ip}` returning `status`, `country`, `regionName`,
//! `city`, `zip`, `lat`, `lon`, `timezone`, `isp`. Fields are passed
//! through verbatim.

use crate::acquisition::resolver::resolve_host;
use crate::acquisition::target::normalize_domain;
use crate::config::ServiceConfig;
use crate::error::AnalyzeError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Location fields as returned by the geo-IP service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub isp: Option<String>,
}

/// Response payload of a geolocation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoReport {
    pub domain: String,
    pub ip_address: String,
    pub location: GeoLocation,
    pub status: String,
}

/// Raw ip-api.com body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
}

/// Geolocates domains.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    client: reqwest::Client,
    api_base: String,
}

impl GeoLocator {
    pub fn new(config: &ServiceConfig) -> Result<Self, AnalyzeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| AnalyzeError::Internal(format!("building geo client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.geo_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve `domain` and geolocate its address.
    pub async fn locate(&self, domain: &str) -> Result<GeoReport, AnalyzeError> {
        let host = normalize_domain(domain)?;
        let ip = resolve_host(&host).await?;

        let url = format!("{}/json/{ip}", self.api_base);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalyzeError::GeoLookup(e.to_string()))?;

        if !resp.status().is_success() {
            warn!(%ip, status = resp.status().as_u16(), "geo service error");
            return Err(AnalyzeError::GeoLookup(format!(
                "geo service returned HTTP {}",
                resp.status().as_u16()
            )));
        }

        let body: IpApiResponse = resp
            .json()
            .await
            .map_err(|e| AnalyzeError::GeoLookup(format!("invalid geo response: {e}")))?;

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| body.status.clone());
            return Err(AnalyzeError::GeoLookup(reason));
        }

        info!(domain = %host, %ip, country = ?body.country, "geolocated domain");

        Ok(GeoReport {
            domain: host,
            ip_address: ip.to_string(),
            location: GeoLocation {
                country: body.country,
                region: body.region_name,
                city: body.city,
                zip: body.zip,
                lat: body.lat,
                lon: body.lon,
                timezone: body.timezone,
                isp: body.isp,
            },
            status: body.status,
        })
    }
}
