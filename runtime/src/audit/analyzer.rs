//! The page analyzer: fetch, extract, score, recommend.

use super::recommend::recommend;
use super::report::AuditReport;
use super::scorer::score;
use crate::acquisition::page_fetcher::{FetchResult, PageFetcher};
use crate::acquisition::target::normalize_url;
use crate::config::ServiceConfig;
use crate::error::AnalyzeError;
use crate::extraction::signals::{extract_signals_blocking, PageSignals};
use tracing::info;
use url::Url;

/// A fetched and scored page, before it is shaped into a response.
#[derive(Debug, Clone)]
pub struct AnalyzedPage {
    pub url: Url,
    pub fetch: FetchResult,
    pub signals: PageSignals,
    pub score: u8,
}

/// Runs the fetch-extract-score pipeline for one URL at a time.
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    fetcher: PageFetcher,
}

impl PageAnalyzer {
    pub fn new(config: &ServiceConfig) -> Result<Self, AnalyzeError> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// Fetch and score `input` without building recommendations.
    pub async fn analyze_page(&self, input: &str) -> Result<AnalyzedPage, AnalyzeError> {
        let url = normalize_url(input)?;
        let fetch = self.fetcher.fetch(&url).await?;
        let signals = extract_signals_blocking(fetch.html.clone(), url.clone()).await?;
        let score = score(&signals);

        Ok(AnalyzedPage {
            url,
            fetch,
            signals,
            score,
        })
    }

    /// Full audit of `input`.
    pub async fn analyze(&self, input: &str) -> Result<AuditReport, AnalyzeError> {
        let page = self.analyze_page(input).await?;
        let recommendations = recommend(&page.signals);

        info!(
            url = %page.url,
            score = page.score,
            recommendations = recommendations.len(),
            "audit complete"
        );

        Ok(AuditReport::new(
            page.url.to_string(),
            page.signals,
            page.score,
            recommendations,
            page.fetch.elapsed_ms,
        ))
    }
}
