// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for the search subsystem.
//!
//! The wire format is whatever the site generator writes into `search.json`
//! (and whatever the remote endpoint answers with): `{"items": [...]}`. Both
//! sources are loosely typed, so every field here tolerates being missing or
//! `null`. A result with no title still renders; it just renders empty.

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Queries shorter than this (in characters, after trimming) never search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default number of results for both backends.
pub const DEFAULT_LIMIT: usize = 10;

/// Treat an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One searchable page, as listed in the static index or returned by the
/// remote endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Site-relative or absolute URL of the page
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    /// Optional excerpt, empty when absent
    #[serde(default, deserialize_with = "nullable")]
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl SearchItem {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// First non-empty of `image` and `thumbnail`.
    pub fn thumbnail_src(&self) -> Option<&str> {
        [self.image.as_deref(), self.thumbnail.as_deref()]
            .into_iter()
            .flatten()
            .find(|src| !src.is_empty())
    }
}

/// Response body shared by `search.json` and the remote endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<SearchItem>,
}

/// Which backend answers queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Fetch `search.json` once and filter in the client
    #[default]
    Static,
    /// Ask the search endpoint for every committed query
    Server,
}

impl SearchMode {
    /// Lenient parse used for page-level flags: anything other than
    /// `"server"` selects the static index.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("server") {
            SearchMode::Server
        } else {
            SearchMode::Static
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Static => "static",
            SearchMode::Server => "server",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(SearchMode::Static),
            "server" => Ok(SearchMode::Server),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// A trimmed user query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Query(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Long enough to hit the index or the network.
    pub fn is_searchable(&self) -> bool {
        self.char_len() >= MIN_QUERY_CHARS
    }

    /// Lowercased form used for substring matching.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
