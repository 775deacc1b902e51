// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Header search modal.
//!
//! ```text
//!             open()                       close() / Escape
//!   Closed ─────────────▶ Open ─────────────────────────▶ Closed
//!
//!   Unwired ──(first open)──▶ Wired
//! ```
//!
//! Input listeners are attached lazily, on the first open only, so pages
//! where nobody searches never pay for them. The results container keeps its
//! contents across close and reopen.

use super::ModalView;
use crate::debounce::{Debouncer, Timer};
use crate::fetch::Fetcher;
use crate::render::{Renderer, Surface};
use crate::search::{RequestSequence, SearchEngine};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Whether the input listeners have been attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    Unwired,
    Wired,
}

pub struct ModalWidget<F, T, V> {
    engine: Rc<SearchEngine<F>>,
    renderer: Rc<Renderer>,
    view: V,
    debouncer: Debouncer<T>,
    sequence: RequestSequence,
    state: Cell<ModalState>,
    wiring: Cell<Wiring>,
}

impl<F, T, V> ModalWidget<F, T, V>
where
    F: Fetcher,
    T: Timer,
    V: ModalView,
{
    pub fn new(engine: Rc<SearchEngine<F>>, renderer: Rc<Renderer>, view: V, timer: T) -> Self {
        let window = engine.config().debounce();
        Self {
            engine,
            renderer,
            view,
            debouncer: Debouncer::new(timer, window),
            sequence: RequestSequence::new(),
            state: Cell::new(ModalState::Closed),
            wiring: Cell::new(Wiring::Unwired),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    pub fn wiring(&self) -> Wiring {
        self.wiring.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show the modal and focus its input.
    ///
    /// Returns `true` exactly once, on the first open: the caller attaches
    /// the input listener then and never again.
    pub fn open(&self) -> bool {
        self.state.set(ModalState::Open);
        self.view.set_open(true);
        let first = self.wiring.replace(Wiring::Wired) == Wiring::Unwired;
        if first {
            debug!("search modal wired");
        }
        self.view.focus_input();
        first
    }

    pub fn close(&self) {
        self.state.set(ModalState::Closed);
        self.view.set_open(false);
    }

    /// Document-level keydown. Only Escape does anything.
    pub fn handle_key(&self, key: &str) -> bool {
        if key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// Input event. Debounced, then searched and rendered.
    ///
    /// Returns whether this event ended up rendering results.
    pub async fn on_input(&self, value: &str) -> bool {
        if self.wiring.get() == Wiring::Unwired {
            return false;
        }
        if !self.debouncer.settle().await {
            return false;
        }
        self.run(value).await
    }

    /// Search `raw` now and render unless a newer search already rendered.
    pub async fn run(&self, raw: &str) -> bool {
        let ticket = self.sequence.issue();
        let items = self.engine.search(raw).await;
        if !self.sequence.commit(ticket) {
            debug!(ticket = ticket.get(), "dropping stale modal results");
            return false;
        }
        let html = self.renderer.render(Surface::Modal, raw, &items);
        self.view.show_results(&html);
        true
    }
}
