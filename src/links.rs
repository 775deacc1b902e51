// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! External link marking for article bodies.
//!
//! Links in `.prose` whose host differs from the page's get the
//! [`EXTERNAL_CLASS`] class so the theme can decorate them. Each link is
//! examined once; [`MARKED_ATTR`] records that it has been.

use url::Url;

/// Class added to links leaving the site.
pub const EXTERNAL_CLASS: &str = "is-external";

/// Attribute set on every link after it has been classified.
pub const MARKED_ATTR: &str = "data-external-marked";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Fragment, `mailto:`, `tel:`, empty or unparsable: leave alone
    Skip,
    Internal,
    External,
}

/// Classify `href` as seen from a page at `page`.
pub fn classify_link(href: &str, page: &Url) -> LinkKind {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return LinkKind::Skip;
    }
    let Ok(target) = page.join(href) else {
        return LinkKind::Skip;
    };
    match target.host_str() {
        Some(host) if Some(host) != page.host_str() => LinkKind::External,
        _ => LinkKind::Internal,
    }
}
