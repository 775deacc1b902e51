#![no_main]

use libfuzzer_sys::fuzz_target;
use notepub::{slugify, AnchorAllocator};

/// Fuzz target for heading slugs.
///
/// Slugs must be usable as fragment identifiers: lowercase ASCII
/// alphanumerics joined by single hyphens, stable under re-slugging.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let slug = slugify(text);
    assert!(slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    assert!(!slug.contains("--"));
    assert_eq!(slugify(&slug), slug);

    // Same heading twice must never collide
    let mut anchors = AnchorAllocator::new();
    let first = anchors.allocate(text, |_| false);
    let second = anchors.allocate(text, |_| false);
    assert_eq!(first.is_some(), !slug.is_empty());
    if let (Some(a), Some(b)) = (first, second) {
        assert_ne!(a, b);
    }
});
