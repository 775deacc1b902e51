// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML escaping for rendered result markup.

/// Escapes HTML special characters for text nodes and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// [`escape_html`], then restore bare `<mark>` and `</mark>` so index
/// generators can highlight matched terms. Tags with attributes stay escaped.
pub fn escape_html_keep_marks(s: &str) -> String {
    escape_html(s)
        .replace("&lt;mark&gt;", "<mark>")
        .replace("&lt;/mark&gt;", "</mark>")
}
