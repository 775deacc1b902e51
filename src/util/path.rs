// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Base-path joining and URL query helpers.
//!
//! A notepub site can be served from a sub-path (`/blog`), so every
//! site-relative URL the theme emits goes through [`with_base_path`].
//! Absolute `http(s)` URLs pass through untouched, which lets a search index
//! point thumbnails at a CDN.

use url::Url;

/// Origin used to parse site-relative locations.
const FALLBACK_ORIGIN: &str = "http://localhost/";

/// True for `http://` and `https://` URLs.
pub fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Strips trailing slashes from a base path (`/blog/` → `/blog`, `/` → ``).
pub fn trim_base(base_path: &str) -> &str {
    base_path.trim_end_matches('/')
}

/// Resolve `path` against the site base path.
///
/// - empty path → the base path, or `/` when there is none
/// - absolute `http(s)` URL → verbatim
/// - otherwise a single leading slash is ensured and the base is prepended
///
/// ```
/// use notepub::util::path::with_base_path;
///
/// assert_eq!(with_base_path("/blog", "/posts/a"), "/blog/posts/a");
/// assert_eq!(with_base_path("/blog/", "posts/a"), "/blog/posts/a");
/// assert_eq!(with_base_path("/blog", "https://x.com/y"), "https://x.com/y");
/// assert_eq!(with_base_path("", ""), "/");
/// ```
pub fn with_base_path(base_path: &str, path: &str) -> String {
    let base = trim_base(base_path);
    if path.is_empty() {
        return if base.is_empty() {
            "/".to_string()
        } else {
            base.to_string()
        };
    }
    if is_absolute_url(path) {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Read the trimmed `q` parameter from a page location.
///
/// Accepts absolute hrefs (`https://site/search?q=x`) and site-relative ones
/// (`/search?q=x`). Returns an empty string when the parameter is missing.
pub fn query_param(location: &str, name: &str) -> String {
    let parsed = Url::parse(location).or_else(|_| {
        Url::parse(FALLBACK_ORIGIN).and_then(|origin| origin.join(location))
    });
    let Ok(url) = parsed else {
        return String::new();
    };
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Encode `pairs` as an `application/x-www-form-urlencoded` query string.
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
