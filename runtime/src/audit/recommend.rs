//! Ordered, human-readable recommendations.
//!
//! Rules fire in a fixed order so identical signals always produce an
//! identical list.

use super::scorer::MIN_INTERNAL_LINKS;
use crate::extraction::signals::PageSignals;

pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_MIN_CHARS: usize = 30;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Emitted when no rule fires.
pub const ALL_GOOD: &str = "Great job! Your page follows basic SEO best practices.";

/// Build the recommendation list. Never empty.
pub fn recommend(signals: &PageSignals) -> Vec<String> {
    let mut out = Vec::new();

    match signals.title.as_deref() {
        None => out.push("Add a title tag to your page.".to_string()),
        Some(title) => {
            let len = title.chars().count();
            if len > TITLE_MAX_CHARS {
                out.push(format!(
                    "Title is too long ({len} characters). Keep it under {TITLE_MAX_CHARS} characters."
                ));
            } else if len < TITLE_MIN_CHARS {
                out.push(format!(
                    "Title is too short ({len} characters). Aim for {TITLE_MIN_CHARS}-{TITLE_MAX_CHARS} characters."
                ));
            }
        }
    }

    match signals.meta_description.as_deref() {
        None => out.push("Add a meta description to your page.".to_string()),
        Some(desc) => {
            let len = desc.chars().count();
            if len > META_DESCRIPTION_MAX_CHARS {
                out.push(format!(
                    "Meta description is too long ({len} characters). Keep it under {META_DESCRIPTION_MAX_CHARS} characters."
                ));
            }
        }
    }

    match signals.headings.h1.len() {
        0 => out.push("Add an H1 heading to your page.".to_string()),
        1 => {}
        n => out.push(format!(
            "Use only one H1 heading per page (found {n})."
        )),
    }

    if signals.images_without_alt > 0 {
        out.push(format!(
            "Add alt text to {} image(s).",
            signals.images_without_alt
        ));
    }

    if !signals.has_ssl {
        out.push("Enable HTTPS (SSL) for better security and rankings.".to_string());
    }

    if signals.internal_links < MIN_INTERNAL_LINKS {
        out.push("Add more internal links to improve site navigation.".to_string());
    }

    if out.is_empty() {
        out.push(ALL_GOOD.to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::signals::Headings;

    fn good_page() -> PageSignals {
        PageSignals {
            title: Some("A well sized title for an example page".to_string()),
            meta_description: Some("Description".to_string()),
            headings: Headings {
                h1: vec!["Main".to_string()],
                ..Headings::default()
            },
            images_without_alt: 0,
            internal_links: 5,
            external_links: 0,
            has_ssl: true,
        }
    }

    #[test]
    fn test_clean_page_gets_single_positive_message() {
        assert_eq!(recommend(&good_page()), vec![ALL_GOOD.to_string()]);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let recs = recommend(&PageSignals {
            images_without_alt: 2,
            ..PageSignals::default()
        });
        assert_eq!(
            recs,
            vec![
                "Add a title tag to your page.",
                "Add a meta description to your page.",
                "Add an H1 heading to your page.",
                "Add alt text to 2 image(s).",
                "Enable HTTPS (SSL) for better security and rankings.",
                "Add more internal links to improve site navigation.",
            ]
        );
    }

    #[test]
    fn test_title_length_rules() {
        let mut page = good_page();
        page.title = Some("x".repeat(61));
        assert!(recommend(&page)[0].starts_with("Title is too long (61"));

        page.title = Some("x".repeat(60));
        assert_eq!(recommend(&page), vec![ALL_GOOD.to_string()]);

        page.title = Some("Short".to_string());
        assert!(recommend(&page)[0].starts_with("Title is too short (5"));

        page.title = Some("x".repeat(30));
        assert_eq!(recommend(&page), vec![ALL_GOOD.to_string()]);
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        let mut page = good_page();
        // 30 chars, 60 bytes.
        page.title = Some("é".repeat(30));
        assert_eq!(recommend(&page), vec![ALL_GOOD.to_string()]);
    }

    #[test]
    fn test_meta_description_too_long() {
        let mut page = good_page();
        page.meta_description = Some("d".repeat(161));
        let recs = recommend(&page);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Meta description is too long (161"));
    }

    #[test]
    fn test_meta_description_boundary() {
        let mut page = good_page();
        page.meta_description = Some("d".repeat(160));
        assert_eq!(recommend(&page), vec![ALL_GOOD.to_string()]);

        // Counted in characters: 160 chars, 320 bytes.
        page.meta_description = Some("é".repeat(160));
        assert_eq!(recommend(&page), vec![ALL_GOOD.to_string()]);
    }

    #[test]
    fn test_multiple_h1() {
        let mut page = good_page();
        page.headings.h1.push("Another".to_string());
        assert_eq!(
            recommend(&page),
            vec!["Use only one H1 heading per page (found 2)."]
        );
    }
}
