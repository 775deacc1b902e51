// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Theme templates expose `window.__notepubBaseURL` and
//! `window.__notepubSearchMode`. The browser glue folds those into one
//! immutable [`SearchConfig`] handed to the engine and the renderer when they
//! are built, so two configurations can coexist in one process.
//!
//! Every field has a default, so `{}` is a valid config and a page only needs
//! to spell out what differs:
//!
//! ```json
//! { "basePath": "/blog", "mode": "server", "debounceMs": 200 }
//! ```

use crate::error::ConfigError;
use crate::types::{Query, SearchMode, DEFAULT_LIMIT};
use crate::util::path::{encode_query, with_base_path};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quiet period after the last keystroke before a search is issued.
pub const DEFAULT_DEBOUNCE_MS: u64 = 180;

/// Site-relative location of the pre-built index.
pub const DEFAULT_INDEX_PATH: &str = "/search.json";

/// Site-relative location of the remote search endpoint.
pub const DEFAULT_ENDPOINT_PATH: &str = "/v1/search";

/// Site-relative location of the dedicated search page.
pub const DEFAULT_PAGE_PATH: &str = "/search";

/// Thumbnail used when a result has neither `image` nor `thumbnail`.
pub const DEFAULT_PLACEHOLDER: &str = "/assets/placeholder.svg";

/// Process-wide search settings, fixed for the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// URL prefix the site is served under (`""`, `/blog`, ...)
    pub base_path: String,
    pub mode: SearchMode,
    /// Static-mode truncation and the `limit` sent to the endpoint
    pub limit: usize,
    pub debounce_ms: u64,
    pub index_path: String,
    pub endpoint_path: String,
    pub page_path: String,
    pub placeholder: String,
    /// Let `<mark>` highlights in snippets through; everything else is escaped
    pub highlight_marks: bool,
    pub messages: Messages,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            mode: SearchMode::Static,
            limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            index_path: DEFAULT_INDEX_PATH.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            page_path: DEFAULT_PAGE_PATH.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            highlight_marks: true,
            messages: Messages::default(),
        }
    }
}

/// User-facing status messages rendered into the results container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    /// Search page only: query below the two-character floor
    pub too_short: String,
    /// Valid query, zero matches
    pub nothing_found: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            too_short: "Введите минимум 2 символа.".to_string(),
            nothing_found: "Пока ничего не найдено.".to_string(),
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reject settings the engine cannot honor.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        for (name, value) in [
            ("indexPath", &self.index_path),
            ("endpointPath", &self.endpoint_path),
            ("pagePath", &self.page_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::RelativePath {
                    name,
                    value: value.clone(),
                });
            }
        }
        Ok(self)
    }

    /// Settings from the legacy page globals. A missing base URL means the
    /// site root; any mode flag other than `server` selects the static index.
    pub fn from_page_globals(base_url: Option<String>, mode_flag: Option<&str>) -> Self {
        let mut config = SearchConfig::default();
        if let Some(base) = base_url {
            config.base_path = base;
        }
        if let Some(flag) = mode_flag {
            config.mode = SearchMode::from_flag(flag);
        }
        config
    }

    /// Validate `candidate`, or fall back. The rejected error is handed back
    /// so the caller can report it.
    pub fn validated_or(
        candidate: Result<Self, ConfigError>,
        fallback: impl FnOnce() -> Self,
    ) -> (Self, Option<ConfigError>) {
        match candidate.and_then(Self::validate) {
            Ok(config) => (config, None),
            Err(err) => (fallback(), Some(err)),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce_ms = window.as_millis() as u64;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolve a site-relative path against [`Self::base_path`].
    pub fn resolve(&self, path: &str) -> String {
        with_base_path(&self.base_path, path)
    }

    /// Where the static index is fetched from.
    pub fn index_url(&self) -> String {
        self.resolve(&self.index_path)
    }

    /// Remote endpoint URL for one query, `limit` always included.
    pub fn endpoint_url(&self, query: &Query) -> String {
        let limit = self.limit.to_string();
        format!(
            "{}?{}",
            self.resolve(&self.endpoint_path),
            encode_query(&[("q", query.as_str()), ("limit", &limit)])
        )
    }

    /// Search page URL mirroring `query`, used for non-navigating history
    /// updates. An empty query drops the parameter entirely.
    pub fn search_page_url(&self, query: &str) -> String {
        if query.is_empty() {
            self.resolve(&self.page_path)
        } else {
            format!(
                "{}?{}",
                self.resolve(&self.page_path),
                encode_query(&[("q", query)])
            )
        }
    }
}
