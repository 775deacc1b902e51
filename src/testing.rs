// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled on native targets but hidden from
//! documentation. It provides a scripted [`Fetcher`] and recording views so
//! widgets can be driven without a browser.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::render::Renderer;
use crate::search::SearchEngine;
use crate::types::{SearchItem, SearchResponse};
use crate::widget::{History, ModalView, PageView};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Scripted answer for a route.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with this body
    Json(String),
    /// Non-2xx status
    Status(u16),
    /// Network failure
    Unreachable,
}

#[derive(Debug, Clone)]
struct Route {
    pattern: String,
    response: MockResponse,
    latency: Duration,
}

#[derive(Debug, Default)]
struct MockState {
    routes: Vec<Route>,
    calls: Vec<String>,
}

/// In-memory [`Fetcher`]. Clones share routes and the call log.
///
/// A route matches a URL exactly, or by path when the URL carries a query
/// string (`/v1/search` matches `/v1/search?q=x&limit=10`). Exact routes win.
/// Unrouted URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    state: Rc<RefCell<MockState>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, pattern: &str, response: MockResponse) -> Self {
        self.route_with_latency(pattern, response, Duration::ZERO)
    }

    /// Route that answers after `latency` on the tokio clock.
    pub fn route_with_latency(
        self,
        pattern: &str,
        response: MockResponse,
        latency: Duration,
    ) -> Self {
        self.state.borrow_mut().routes.push(Route {
            pattern: pattern.to_string(),
            response,
            latency,
        });
        self
    }

    pub fn json(self, pattern: &str, body: &str) -> Self {
        self.route(pattern, MockResponse::Json(body.to_string()))
    }

    /// Every URL requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.borrow().calls.len()
    }

    /// Requests whose path (query string ignored) equals `path`.
    pub fn calls_to(&self, path: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|url| url.split('?').next() == Some(path))
            .count()
    }

    fn lookup(&self, url: &str) -> Option<Route> {
        let state = self.state.borrow();
        let path = url.split('?').next().unwrap_or(url);
        state
            .routes
            .iter()
            .find(|route| route.pattern == url)
            .or_else(|| state.routes.iter().find(|route| route.pattern == path))
            .cloned()
    }
}

impl Fetcher for MockFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.state.borrow_mut().calls.push(url.to_string());
        let Some(route) = self.lookup(url) else {
            return Err(FetchError::status(url, 404));
        };
        if !route.latency.is_zero() {
            tokio::time::sleep(route.latency).await;
        }
        match route.response {
            MockResponse::Json(body) => Ok(body),
            MockResponse::Status(status) => Err(FetchError::status(url, status)),
            MockResponse::Unreachable => Err(FetchError::transport(url, "connection refused")),
        }
    }
}

/// [`ModalView`] that records what the widget did.
#[derive(Debug, Default)]
pub struct RecordingModalView {
    open: Cell<bool>,
    focus_count: Cell<usize>,
    results: RefCell<Vec<String>>,
}

impl RecordingModalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }

    /// Every markup string written to the results container.
    pub fn renders(&self) -> Vec<String> {
        self.results.borrow().clone()
    }

    pub fn last_render(&self) -> Option<String> {
        self.results.borrow().last().cloned()
    }
}

impl ModalView for RecordingModalView {
    fn set_open(&self, open: bool) {
        self.open.set(open);
    }

    fn focus_input(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }

    fn show_results(&self, html: &str) {
        self.results.borrow_mut().push(html.to_string());
    }
}

/// [`PageView`] with a typed-into input.
#[derive(Debug, Default)]
pub struct RecordingPageView {
    input: RefCell<String>,
    results: RefCell<Vec<String>>,
}

impl RecordingPageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the visitor editing the input.
    pub fn type_text(&self, value: &str) {
        *self.input.borrow_mut() = value.to_string();
    }

    pub fn renders(&self) -> Vec<String> {
        self.results.borrow().clone()
    }

    pub fn last_render(&self) -> Option<String> {
        self.results.borrow().last().cloned()
    }
}

impl PageView for RecordingPageView {
    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn set_input_value(&self, value: &str) {
        self.type_text(value);
    }

    fn show_results(&self, html: &str) {
        self.results.borrow_mut().push(html.to_string());
    }
}

/// [`History`] backed by a string, recording every replace.
#[derive(Debug)]
pub struct MemoryHistory {
    location: RefCell<String>,
    replaced: RefCell<Vec<String>>,
}

impl MemoryHistory {
    pub fn new(location: &str) -> Self {
        Self {
            location: RefCell::new(location.to_string()),
            replaced: RefCell::new(Vec::new()),
        }
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.location.borrow().clone()
    }

    fn replace_url(&self, url: &str) {
        *self.location.borrow_mut() = url.to_string();
        self.replaced.borrow_mut().push(url.to_string());
    }
}

/// The two-item index used throughout the engine tests.
pub fn hello_world_index() -> String {
    index_json(&[
        SearchItem::new("Hello World", "/a"),
        SearchItem::new("Other", "/b"),
    ])
}

/// Serialize items as an `{"items": [...]}` body.
pub fn index_json(items: &[SearchItem]) -> String {
    let response = SearchResponse {
        items: items.to_vec(),
    };
    serde_json::to_string(&response).unwrap_or_default()
}

/// `count` posts titled "Post N" with a shared snippet.
pub fn numbered_items(count: usize) -> Vec<SearchItem> {
    (0..count)
        .map(|i| {
            SearchItem::new(format!("Post {}", i), format!("/posts/{}", i))
                .with_snippet("Notes about rust and wasm")
        })
        .collect()
}

/// Shared engine and renderer, as the browser glue builds them.
pub fn engine_and_renderer(
    config: SearchConfig,
    fetcher: MockFetcher,
) -> (Rc<SearchEngine<MockFetcher>>, Rc<Renderer>) {
    let renderer = Rc::new(Renderer::new(&config));
    (Rc::new(SearchEngine::new(config, fetcher)), renderer)
}
