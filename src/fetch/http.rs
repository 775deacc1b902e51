// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport backed by reqwest.
//!
//! Resolves the site-relative URLs the engine produces against a site origin
//! (`https://example.com`) and sends `Accept: application/json`, the same
//! request the theme makes from the browser.

use super::Fetcher;
use crate::error::FetchError;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Per-request timeout. A hung endpoint becomes "no results", not a hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed [`Fetcher`] for a live site.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    origin: Url,
}

impl HttpFetcher {
    pub fn new(origin: Url) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("notepub/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::transport(origin.as_str(), e))?;
        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let target = self
            .origin
            .join(url)
            .map_err(|e| FetchError::transport(url, e))?;
        debug!(%target, "GET");

        let response = self
            .client
            .get(target.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(target.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(target.as_str(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::transport(target.as_str(), e))
    }
}
