//! Slug shape and anchor allocation properties.

use notepub::{slugify, AnchorAllocator};
use proptest::prelude::*;
use std::collections::HashSet;

fn heading_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 &,.!?-]{0,30}",
        "[А-Яа-яЁё ,.-]{0,30}",
        "\\PC{0,30}",
    ]
}

proptest! {
    #[test]
    fn prop_slug_charset(text in heading_strategy()) {
        let slug = slugify(&text);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn prop_slug_hyphens_are_separators(text in heading_strategy()) {
        let slug = slugify(&text);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn prop_slug_is_idempotent(text in heading_strategy()) {
        let slug = slugify(&text);
        prop_assert_eq!(slugify(&slug), slug);
    }

    #[test]
    fn prop_allocated_ids_unique(texts in prop::collection::vec(heading_strategy(), 0..30)) {
        let mut anchors = AnchorAllocator::new();
        let mut seen = HashSet::new();
        for text in &texts {
            if let Some(id) = anchors.allocate(text, |_| false) {
                prop_assert!(seen.insert(id.clone()), "duplicate id {}", id);
                prop_assert!(id.starts_with(&slugify(text)));
            }
        }
    }

    #[test]
    fn prop_allocation_avoids_document_ids(
        text in "[a-z]{1,8}",
        taken in 0usize..5,
    ) {
        let base = slugify(&text);
        let existing: HashSet<String> = (0..taken)
            .map(|n| if n == 0 { base.clone() } else { format!("{}-{}", base, n + 1) })
            .collect();
        let mut anchors = AnchorAllocator::new();
        let id = anchors.allocate(&text, |id| existing.contains(id)).unwrap();
        prop_assert!(!existing.contains(&id));
    }
}
