//! Classify anchors as internal or external relative to the audited page.

use url::{ParseError, Url};

/// Where an `<a href>` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same host, root-relative, or relative path.
    Internal,
    /// Another host, or a non-web scheme such as `mailto:`.
    External,
    /// In-page `#fragment`; counted as neither.
    Fragment,
}

/// Classify `href` as seen from a page at `base`.
pub fn classify_link(href: &str, base: &Url) -> LinkKind {
    let href = href.trim();

    if href.starts_with('#') {
        return LinkKind::Fragment;
    }

    let target = match Url::parse(href) {
        Ok(abs) => abs,
        // Root-relative, path-relative and protocol-relative links.
        Err(ParseError::RelativeUrlWithoutBase) => match base.join(href) {
            Ok(joined) => joined,
            Err(_) => return LinkKind::External,
        },
        Err(_) => return LinkKind::External,
    };

    if !matches!(target.scheme(), "http" | "https") {
        return LinkKind::External;
    }

    match (target.host_str(), base.host_str()) {
        (Some(t), Some(b)) if t.eq_ignore_ascii_case(b) => LinkKind::Internal,
        _ => LinkKind::External,
    }
}
