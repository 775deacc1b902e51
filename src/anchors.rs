// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heading anchors for article bodies.
//!
//! Headings inside `.prose` that lack an `id` get one derived from their
//! text, so `#section` links work on any rendered post. Russian headings are
//! transliterated rather than percent-encoded:
//!
//! ```
//! use notepub::anchors::slugify;
//!
//! assert_eq!(slugify("Привет, мир!"), "privet-mir");
//! assert_eq!(slugify("Tips & Tricks"), "tips-and-tricks");
//! ```

use std::collections::HashSet;

/// Transliteration for lowercase Cyrillic.
fn transliterate(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "i",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Strip diacritics from Latin letters (`é` → `e`).
#[cfg(feature = "unicode-normalization")]
fn fold_marks(s: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold_marks(s: &str) -> String {
    s.to_string()
}

/// URL-fragment-safe slug: lowercase ASCII letters and digits joined by
/// single hyphens, never starting or ending with one. May be empty.
pub fn slugify(text: &str) -> String {
    let folded = fold_marks(text.to_lowercase().trim());

    let mut mapped = String::with_capacity(folded.len());
    for c in folded.chars() {
        match c {
            '&' => mapped.push_str(" and "),
            c => match transliterate(c) {
                Some(latin) => mapped.push_str(latin),
                None => mapped.push(c),
            },
        }
    }

    let mut slug = String::with_capacity(mapped.len());
    let mut pending_separator = false;
    for c in mapped.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Hands out unique heading ids within one document.
#[derive(Debug, Default)]
pub struct AnchorAllocator {
    used: HashSet<String>,
}

impl AnchorAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an id that a heading already carries.
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Allocate an id for a heading with `text`.
    ///
    /// `exists` reports ids present elsewhere in the document. Collisions get
    /// `-2`, `-3`, ... appended. `None` when the text has no sluggable
    /// characters.
    pub fn allocate(&mut self, text: &str, exists: impl Fn(&str) -> bool) -> Option<String> {
        let base = slugify(text);
        if base.is_empty() {
            return None;
        }
        let mut id = base.clone();
        let mut n = 2;
        while self.used.contains(&id) || exists(&id) {
            id = format!("{}-{}", base, n);
            n += 1;
        }
        self.used.insert(id.clone());
        Some(id)
    }

    /// Process one heading in document order: keep an existing id, otherwise
    /// allocate one. Returns the id to set, if any.
    pub fn assign(
        &mut self,
        current_id: &str,
        text: &str,
        exists: impl Fn(&str) -> bool,
    ) -> Option<String> {
        if !current_id.is_empty() {
            self.reserve(current_id);
            return None;
        }
        self.allocate(text, exists)
    }
}
