// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transports for the index and the search endpoint.
//!
//! The engine never talks to the network directly. It asks a [`Fetcher`] for
//! the body behind a site-relative URL and decodes JSON itself, so the same
//! search code runs against the browser's `fetch` (feature `wasm`), reqwest
//! (feature `http`), a built site directory on disk, or a test double.
//!
//! Everything here is single-threaded: futures are not required to be `Send`.

#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub mod http;
#[cfg(not(target_arch = "wasm32"))]
pub mod site;

use crate::error::FetchError;
use crate::types::SearchResponse;
use std::rc::Rc;

/// GET a URL and hand back the body of a successful response.
///
/// Implementations must map non-2xx statuses to [`FetchError::Status`]; the
/// engine relies on that to treat them as "no results".
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for Rc<F> {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }
}

/// Fetch and decode an `{"items": [...]}` document.
pub async fn fetch_response<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<SearchResponse, FetchError> {
    let body = fetcher.get_text(url).await?;
    decode_response(&body)
}

/// Decode a response body. Missing or `null` `items` is an empty list.
pub fn decode_response(body: &str) -> Result<SearchResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}
