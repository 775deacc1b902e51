// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The library itself is DOM-free: widgets talk to view traits and the
//! engine talks to a [`Fetcher`](crate::fetch::Fetcher). This is where those
//! traits meet `web_sys` in the browser.

#[cfg(feature = "wasm")]
pub mod wasm;
