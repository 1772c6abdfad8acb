//! Extract on-page SEO signals from HTML.
//!
//! Parsing uses `scraper`, whose `Html` is not `Send`; async callers should
//! go through [`extract_signals_blocking`], which runs the parse on the
//! blocking pool.

use super::links::{classify_link, LinkKind};
use crate::error::AnalyzeError;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta[name]").unwrap());
static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3").unwrap());
static IMG_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Headings grouped by level, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

/// Structural facts about one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSignals {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub headings: Headings,
    pub images_without_alt: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub has_ssl: bool,
}

/// Extract signals from `html` fetched from `base`.
pub fn extract_signals(html: &str, base: &Url) -> PageSignals {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SEL)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty());

    let meta_description = document
        .select(&META_SEL)
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|n| n.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let mut headings = Headings::default();
    for el in document.select(&HEADING_SEL) {
        let text = element_text(el);
        match el.value().name() {
            "h1" => headings.h1.push(text),
            "h2" => headings.h2.push(text),
            _ => headings.h3.push(text),
        }
    }

    let images_without_alt = document
        .select(&IMG_SEL)
        .filter(|img| img.value().attr("alt").map_or(true, |alt| alt.trim().is_empty()))
        .count();

    let mut internal_links = 0;
    let mut external_links = 0;
    for a in document.select(&LINK_SEL) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        match classify_link(href, base) {
            LinkKind::Internal => internal_links += 1,
            LinkKind::External => external_links += 1,
            LinkKind::Fragment => {}
        }
    }

    PageSignals {
        title,
        meta_description,
        headings,
        images_without_alt,
        internal_links,
        external_links,
        has_ssl: base.scheme() == "https",
    }
}

/// Run [`extract_signals`] on the blocking pool.
pub async fn extract_signals_blocking(html: String, base: Url) -> Result<PageSignals, AnalyzeError> {
    let signals = tokio::task::spawn_blocking(move || extract_signals(&html, &base)).await?;
    Ok(signals)
}

/// Text content with whitespace runs collapsed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
