// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering guard for overlapping searches.
//!
//! Requests are never aborted, so with rapid typing a slow response for "ru"
//! can land after the response for "rust". Each surface numbers its searches
//! and drops any completion older than the last one it rendered.
//!
//! **Invariant**: rendered sequence numbers are strictly increasing.

use std::cell::Cell;

/// Monotonic sequence number of one committed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues tickets and tracks the newest one rendered.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: Cell<u64>,
    rendered: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number the next search.
    pub fn issue(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Claim the right to render. Returns `false` for a completion that is
    /// older than something already on screen.
    pub fn commit(&self, ticket: Ticket) -> bool {
        if ticket.0 < self.rendered.get() {
            return false;
        }
        self.rendered.set(ticket.0);
        true
    }

    pub fn last_rendered(&self) -> u64 {
        self.rendered.get()
    }
}
