// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke debouncing.
//!
//! Every input event calls [`Debouncer::settle`], which waits out the quiet
//! period and reports whether that event was the last one. Earlier events are
//! superseded by bumping a generation counter, the async equivalent of
//! `clearTimeout` + `setTimeout`. Only the survivor searches, so there is at
//! most one logical search per debounce window.
//!
//! ```ignore
//! // in the input handler
//! if debouncer.settle().await {
//!     run_search(value).await;
//! }
//! ```

use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

/// Source of delays. Tokio natively, `gloo-timers` in the browser.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// [`Timer`] on the tokio clock (pausable in tests).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Trailing-edge debouncer.
#[derive(Debug)]
pub struct Debouncer<T> {
    timer: T,
    window: Duration,
    generation: Cell<u64>,
}

impl<T: Timer> Debouncer<T> {
    pub fn new(timer: T, window: Duration) -> Self {
        Self {
            timer,
            window,
            generation: Cell::new(0),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Wait out the quiet period. `true` if no newer event (or
    /// [`cancel`](Self::cancel)) arrived meanwhile.
    pub async fn settle(&self) -> bool {
        let mine = self.bump();
        self.timer.sleep(self.window).await;
        self.generation.get() == mine
    }

    /// Drop whatever is pending. Used when a form submit searches immediately.
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}
