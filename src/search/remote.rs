// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Remote query backend: one GET per committed query.
//!
//! The endpoint does its own filtering and limiting; whatever `items` it
//! returns are shown as-is, in its order.

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::fetch::{fetch_response, Fetcher};
use crate::types::{Query, SearchItem};
use tracing::debug;

/// Ask the endpoint for `query`. Errors are returned to the engine, which
/// owns the "failure means zero results" policy.
pub async fn query_endpoint<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &SearchConfig,
    query: &Query,
) -> Result<Vec<SearchItem>, FetchError> {
    let url = config.endpoint_url(query);
    let response = fetch_response(fetcher, &url).await?;
    debug!(%url, items = response.items.len(), "remote search answered");
    Ok(response.items)
}
