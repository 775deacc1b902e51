// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! None of these reach a page visitor. The search engine recovers every
//! [`FetchError`] as "no results" and logs it. [`ConfigError`] fails the CLI;
//! in the browser it is written to the console and the page-global settings
//! are used instead.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a JSON document from the index or the search endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, timeout, or the transport itself failed
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not JSON, or not the `{"items": [...]}` shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a file from a local site directory failed
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn transport(url: &str, message: impl ToString) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn status(url: &str, status: u16) -> Self {
        FetchError::Status {
            url: url.to_string(),
            status,
        }
    }
}

/// Invalid search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A JS config object that does not deserialize
    #[error("invalid config object: {0}")]
    Object(String),

    #[error("unknown search mode '{0}' (expected 'static' or 'server')")]
    UnknownMode(String),

    #[error("result limit must be at least 1")]
    ZeroLimit,

    #[error("{name} must be a site-relative path starting with '/', got '{value}'")]
    RelativePath { name: &'static str, value: String },
}
