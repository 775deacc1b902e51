// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static index backend: fetch `search.json` once, filter in the client.
//!
//! The index is loaded lazily on the first searchable query and memoized for
//! the lifetime of the engine. The memo is a `tokio::sync::OnceCell`, so a
//! second query that arrives while the first load is still in flight waits on
//! that load instead of starting another request.
//!
//! A failed load is memoized too, as an empty index. Picking up a fixed
//! `search.json` needs a new engine (in the browser, a page load).
//!
//! Matching is a plain case-insensitive substring test on title and snippet.
//! Items keep index order; the first `limit` matches win.

use crate::fetch::{fetch_response, Fetcher};
use crate::types::{Query, SearchItem};
use std::rc::Rc;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// One index item with its case-folded haystacks computed at load time.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub item: SearchItem,
    title_folded: String,
    snippet_folded: String,
}

impl IndexEntry {
    pub fn new(item: SearchItem) -> Self {
        Self {
            title_folded: item.title.to_lowercase(),
            snippet_folded: item.snippet.to_lowercase(),
            item,
        }
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title_folded.contains(needle) || self.snippet_folded.contains(needle)
    }
}

/// Memoized static index.
#[derive(Debug, Default)]
pub struct StaticIndex {
    entries: OnceCell<Rc<[IndexEntry]>>,
}

impl StaticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an already-loaded index (CLI inspection, benches).
    pub fn from_items(items: Vec<SearchItem>) -> Self {
        let entries: Rc<[IndexEntry]> = items.into_iter().map(IndexEntry::new).collect();
        Self {
            entries: OnceCell::new_with(Some(entries)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.initialized()
    }

    /// Number of items, or `None` before the first load completes.
    pub fn len(&self) -> Option<usize> {
        self.entries.get().map(|entries| entries.len())
    }

    /// Return the memoized entries, loading them from `url` on first use.
    pub async fn entries<F: Fetcher + ?Sized>(&self, fetcher: &F, url: &str) -> Rc<[IndexEntry]> {
        if let Some(entries) = self.entries.get() {
            debug!(items = entries.len(), "static index cache hit");
            return Rc::clone(entries);
        }
        let entries = self
            .entries
            .get_or_init(|| async {
                match fetch_response(fetcher, url).await {
                    Ok(response) => {
                        debug!(url, items = response.items.len(), "static index loaded");
                        response.items.into_iter().map(IndexEntry::new).collect()
                    }
                    Err(err) => {
                        warn!(url, error = %err, "static index unavailable, searching an empty index");
                        Rc::from(Vec::new())
                    }
                }
            })
            .await;
        Rc::clone(entries)
    }

    /// Load (if needed) and filter.
    pub async fn search<F: Fetcher + ?Sized>(
        &self,
        fetcher: &F,
        url: &str,
        query: &Query,
        limit: usize,
    ) -> Vec<SearchItem> {
        let entries = self.entries(fetcher, url).await;
        filter_entries(&entries, query, limit)
    }
}

/// Case-insensitive substring filter over title and snippet, index order,
/// truncated to `limit`.
pub fn filter_entries(entries: &[IndexEntry], query: &Query, limit: usize) -> Vec<SearchItem> {
    let needle = query.folded();
    entries
        .iter()
        .filter(|entry| entry.matches(&needle))
        .take(limit)
        .map(|entry| entry.item.clone())
        .collect()
}

/// [`filter_entries`] over plain items, folding on the fly.
pub fn filter_items(items: &[SearchItem], query: &Query, limit: usize) -> Vec<SearchItem> {
    let needle = query.folded();
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.snippet.to_lowercase().contains(&needle)
        })
        .take(limit)
        .cloned()
        .collect()
}
