//! The audit report returned to callers.

use crate::extraction::signals::{Headings, PageSignals};
use serde::{Deserialize, Serialize};

/// Complete result of one SEO analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub url: String,
    pub score: u8,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub headings: Headings,
    pub images_without_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub has_ssl: bool,
    pub load_time_ms: u64,
    pub recommendations: Vec<String>,
}

impl AuditReport {
    /// Assemble a report from its parts.
    pub fn new(
        url: String,
        signals: PageSignals,
        score: u8,
        recommendations: Vec<String>,
        load_time_ms: u64,
    ) -> Self {
        Self {
            url,
            score,
            title: signals.title,
            meta_description: signals.meta_description,
            headings: signals.headings,
            images_without_alt: signals.images_without_alt,
            internal_links: signals.internal_links,
            external_links: signals.external_links,
            has_ssl: signals.has_ssl,
            load_time_ms,
            recommendations,
        }
    }
}
