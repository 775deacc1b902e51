// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side behavior for the notepub static blog theme.
//!
//! The centerpiece is site search: a header modal and a dedicated search page
//! that share one engine. The engine answers from a pre-built `search.json`
//! (filtered in the client) or from a remote endpoint, chosen per site.
//! Around it sit the smaller page behaviors the theme ships: heading anchors,
//! external link marking, the hub filter and the mobile navigation drawer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  ModalWidget │   │PageController│   │  CLI (main)  │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │  debounce + sequence guard          │
//!        ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          SearchEngine<F: Fetcher>  ──▶  Renderer     │
//! └──────────────┬──────────────────────────────────────┘
//!                ▼
//!   BrowserFetcher │ HttpFetcher │ SiteFetcher │ MockFetcher
//! ```
//!
//! Nothing below `runtime` touches the DOM. Widgets talk to small view
//! traits, so the whole search flow runs natively under tokio in tests and
//! from the `notepub` CLI.
//!
//! # Usage
//!
//! ```no_run
//! use notepub::fetch::site::SiteFetcher;
//! use notepub::{Renderer, SearchConfig, SearchEngine, Surface};
//!
//! # async fn demo() {
//! let config = SearchConfig::default().with_base_path("/blog");
//! let renderer = Renderer::new(&config);
//! let engine = SearchEngine::new(config, SiteFetcher::new("public").mounted_at("/blog"));
//!
//! let items = engine.search("rust").await;
//! println!("{}", renderer.render(Surface::Page, "rust", &items));
//! # }
//! ```

pub mod anchors;
pub mod config;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod hub;
pub mod links;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod search;
pub mod types;
pub mod util;
pub mod widget;

#[cfg(not(target_arch = "wasm32"))]
pub mod testing;

pub use anchors::{slugify, AnchorAllocator};
pub use config::{Messages, SearchConfig};
pub use debounce::{Debouncer, Timer};
pub use error::{ConfigError, FetchError};
pub use fetch::Fetcher;
pub use render::{Renderer, Surface};
pub use search::{RequestSequence, SearchEngine, Ticket};
pub use types::{Query, SearchItem, SearchMode, SearchResponse, DEFAULT_LIMIT, MIN_QUERY_CHARS};
pub use widget::{ModalWidget, PageController};

#[cfg(not(target_arch = "wasm32"))]
pub use debounce::TokioTimer;
