//! Heuristic 0-100 score from page signals.

use crate::extraction::signals::PageSignals;

const MAX_SCORE: i32 = 100;
const NO_TITLE_PENALTY: i32 = 15;
const NO_META_DESCRIPTION_PENALTY: i32 = 10;
const H1_COUNT_PENALTY: i32 = 10;
const PER_IMAGE_ALT_PENALTY: i32 = 2;
const IMAGE_ALT_PENALTY_CAP: i32 = 20;
const NO_SSL_PENALTY: i32 = 20;
const LOW_INTERNAL_LINKS_PENALTY: i32 = 5;

/// Fewer internal links than this is penalized.
pub const MIN_INTERNAL_LINKS: usize = 3;

/// Penalty for images lacking alt text: 2 each, never more than 20.
pub fn image_alt_penalty(images_without_alt: usize) -> i32 {
    let count = images_without_alt.min(IMAGE_ALT_PENALTY_CAP as usize) as i32;
    (count * PER_IMAGE_ALT_PENALTY).min(IMAGE_ALT_PENALTY_CAP)
}

/// Score a page. Starts at 100 and subtracts penalties, floored at 0.
pub fn score(signals: &PageSignals) -> u8 {
    let mut score = MAX_SCORE;

    if signals.title.is_none() {
        score -= NO_TITLE_PENALTY;
    }
    if signals.meta_description.is_none() {
        score -= NO_META_DESCRIPTION_PENALTY;
    }
    if signals.headings.h1.len() != 1 {
        score -= H1_COUNT_PENALTY;
    }
    score -= image_alt_penalty(signals.images_without_alt);
    if !signals.has_ssl {
        score -= NO_SSL_PENALTY;
    }
    if signals.internal_links < MIN_INTERNAL_LINKS {
        score -= LOW_INTERNAL_LINKS_PENALTY;
    }

    score.clamp(0, MAX_SCORE) as u8
}
