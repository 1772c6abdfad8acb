//! Placeholder traffic heuristic.
//!
//! Not a traffic model. The formula is kept stable so repeated calls on the
//! same page agree:
//!
//! - pages = max(1, raw body bytes / 50 000)
//! - monthly visits = max(100, pages * 100 * score / 100 * 10)
//! - monthly page views = visits * 1.5

use crate::audit::analyzer::AnalyzedPage;
use serde::{Deserialize, Serialize};

const BYTES_PER_PAGE: usize = 50_000;
const VISITS_PER_PAGE: f64 = 100.0;
const VISIT_MULTIPLIER: f64 = 10.0;
const MIN_MONTHLY_VISITS: u64 = 100;
const PAGE_VIEWS_PER_VISIT: f64 = 1.5;

/// Response payload of a traffic estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficEstimate {
    pub url: String,
    pub estimated_pages: u64,
    pub estimated_monthly_visits: u64,
    pub estimated_monthly_page_views: u64,
    pub seo_score: u8,
    pub load_time_ms: u64,
    pub confidence: String,
    pub methodology: String,
}

/// Estimated page count for a body of `content_bytes`.
pub fn estimated_pages(content_bytes: usize) -> u64 {
    (content_bytes / BYTES_PER_PAGE).max(1) as u64
}

/// Monthly visits for `pages` pages scoring `score`.
pub fn monthly_visits(pages: u64, score: u8) -> u64 {
    let raw = pages as f64 * VISITS_PER_PAGE * score as f64 / 100.0 * VISIT_MULTIPLIER;
    (raw as u64).max(MIN_MONTHLY_VISITS)
}

/// Monthly page views for `visits` visits.
pub fn monthly_page_views(visits: u64) -> u64 {
    (visits as f64 * PAGE_VIEWS_PER_VISIT) as u64
}

/// Build an estimate from an analyzed page.
pub fn estimate_from_page(page: &AnalyzedPage) -> TrafficEstimate {
    let pages = estimated_pages(page.fetch.content_length);
    let visits = monthly_visits(pages, page.score);

    TrafficEstimate {
        url: page.url.to_string(),
        estimated_pages: pages,
        estimated_monthly_visits: visits,
        estimated_monthly_page_views: monthly_page_views(visits),
        seo_score: page.score,
        load_time_ms: page.fetch.elapsed_ms,
        confidence: "low".to_string(),
        methodology: "heuristic based on page size and on-page SEO score".to_string(),
    }
}
