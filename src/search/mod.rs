// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine shared by the modal widget and the search page.
//!
//! One contract, two backends. [`SearchEngine::search`] trims the query,
//! refuses anything under two characters without touching the index or the
//! network, then either filters the memoized static index or asks the remote
//! endpoint. It never fails: transport errors, bad statuses and malformed JSON
//! are logged and come back as an empty list, so the worst a visitor can see
//! is "nothing found".
//!
//! ```text
//!            ┌──────────────┐
//!  query ───▶│ SearchEngine │── < 2 chars ──▶ []
//!            └──────┬───────┘
//!        static     │      server
//!      ┌────────────┴────────────┐
//!      ▼                         ▼
//! ┌─────────────┐         ┌─────────────┐
//! │ StaticIndex │         │   remote    │
//! │ (memoized)  │         │ GET /v1/... │
//! └─────────────┘         └─────────────┘
//! ```

pub mod remote;
pub mod sequence;
pub mod static_index;

use crate::config::SearchConfig;
use crate::fetch::Fetcher;
use crate::types::{Query, SearchItem, SearchMode};
use static_index::StaticIndex;
use tracing::{debug, warn};

pub use sequence::{RequestSequence, Ticket};
pub use static_index::{filter_items, IndexEntry};

/// Dual-mode search engine over a [`Fetcher`].
pub struct SearchEngine<F> {
    config: SearchConfig,
    fetcher: F,
    index: StaticIndex,
}

impl<F: Fetcher> SearchEngine<F> {
    pub fn new(config: SearchConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            index: StaticIndex::new(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The memoized static index (unloaded until the first static query).
    pub fn static_index(&self) -> &StaticIndex {
        &self.index
    }

    /// Search with the configured backend.
    pub async fn search(&self, query: &str) -> Vec<SearchItem> {
        self.search_with_mode(query, self.config.mode).await
    }

    /// Search with an explicit backend.
    pub async fn search_with_mode(&self, query: &str, mode: SearchMode) -> Vec<SearchItem> {
        let query = Query::new(query);
        if !query.is_searchable() {
            debug!(query = %query, "query below minimum length");
            return Vec::new();
        }

        match mode {
            SearchMode::Static => {
                let url = self.config.index_url();
                self.index
                    .search(&self.fetcher, &url, &query, self.config.limit)
                    .await
            }
            SearchMode::Server => {
                remote::query_endpoint(&self.fetcher, &self.config, &query)
                    .await
                    .unwrap_or_else(|err| {
                        warn!(query = %query, error = %err, "remote search failed");
                        Vec::new()
                    })
            }
        }
    }
}
