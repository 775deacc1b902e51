// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dedicated search page (`/search?q=...`).
//!
//! The query lives in the URL. Loading the page with `?q=` searches at once;
//! every committed search afterwards rewrites the URL in place with
//! `history.replaceState`, so reload and share both land on the same results
//! without piling up history entries.

use super::{History, PageView};
use crate::debounce::{Debouncer, Timer};
use crate::fetch::Fetcher;
use crate::render::{Renderer, Surface};
use crate::search::{RequestSequence, SearchEngine};
use crate::util::path::query_param;
use std::rc::Rc;
use tracing::debug;

pub struct PageController<F, T, V, H> {
    engine: Rc<SearchEngine<F>>,
    renderer: Rc<Renderer>,
    view: V,
    history: H,
    debouncer: Debouncer<T>,
    sequence: RequestSequence,
}

impl<F, T, V, H> PageController<F, T, V, H>
where
    F: Fetcher,
    T: Timer,
    V: PageView,
    H: History,
{
    pub fn new(
        engine: Rc<SearchEngine<F>>,
        renderer: Rc<Renderer>,
        view: V,
        history: H,
        timer: T,
    ) -> Self {
        let window = engine.config().debounce();
        Self {
            engine,
            renderer,
            view,
            history,
            debouncer: Debouncer::new(timer, window),
            sequence: RequestSequence::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Restore the query from the URL and search immediately if there is one.
    pub async fn init(&self) -> bool {
        let initial = query_param(&self.history.location(), "q");
        if initial.is_empty() {
            return false;
        }
        debug!(query = %initial, "search page restored from url");
        self.view.set_input_value(&initial);
        self.run(&initial).await
    }

    /// Form submit: search the current input now, dropping any pending
    /// debounced search.
    pub async fn submit(&self) -> bool {
        self.debouncer.cancel();
        let value = self.view.input_value();
        self.run(&value).await
    }

    /// Input event: search whatever the input holds once typing settles.
    pub async fn on_input(&self) -> bool {
        if !self.debouncer.settle().await {
            return false;
        }
        let value = self.view.input_value();
        self.run(&value).await
    }

    /// Mirror `raw` into the URL, search, and render unless stale.
    pub async fn run(&self, raw: &str) -> bool {
        let query = raw.trim();
        self.history
            .replace_url(&self.engine.config().search_page_url(query));

        let ticket = self.sequence.issue();
        let items = self.engine.search(query).await;
        if !self.sequence.commit(ticket) {
            debug!(ticket = ticket.get(), "dropping stale page results");
            return false;
        }
        let html = self.renderer.render(Surface::Page, query, &items);
        self.view.show_results(&html);
        true
    }
}
