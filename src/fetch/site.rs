// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serve requests from a built site directory.
//!
//! `notepub search --site public/` runs the static backend against the files a
//! site generator produced, without a web server. URLs arrive already joined
//! with the base path (`/blog/search.json`), so the fetcher strips its mount
//! point before mapping onto the directory. Query strings are never files:
//! a server-mode request against a site directory is a 404.

use super::Fetcher;
use crate::error::FetchError;
use crate::util::path::trim_base;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File-backed [`Fetcher`] rooted at a site output directory.
#[derive(Debug, Clone)]
pub struct SiteFetcher {
    root: PathBuf,
    mount: String,
}

impl SiteFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mount: String::new(),
        }
    }

    /// Strip `base_path` from incoming URLs (the site is served under it).
    pub fn mounted_at(mut self, base_path: &str) -> Self {
        self.mount = trim_base(base_path).to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a site URL to a file under the root, refusing to escape it.
    fn locate(&self, url: &str) -> Option<PathBuf> {
        if url.contains('?') {
            return None;
        }
        let path = match url.strip_prefix(self.mount.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => url,
        };
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl Fetcher for SiteFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let Some(file) = self.locate(url) else {
            return Err(FetchError::status(url, 404));
        };
        debug!(url, file = %file.display(), "serving from site directory");
        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::status(url, 404))
            }
            Err(source) => Err(FetchError::Io { path: file, source }),
        }
    }
}
