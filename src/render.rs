// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result markup, identical for the modal and the search page.
//!
//! The renderer is a pure function of (surface, query, items). It never
//! reorders: items appear exactly as the engine returned them. All text and
//! attribute values are escaped, so a title like `<script>` in the index is
//! shown, not executed. Snippets are escaped too, except for bare `<mark>`
//! highlight tags (see [`SearchConfig::highlight_marks`]). Any other markup a
//! generator puts in a snippet shows up as literal text.
//!
//! ```html
//! <ul>
//!   <li><a class="search-item-card" href="/blog/posts/a">
//!     <img class="search-item-thumb" src="/blog/assets/placeholder.svg" alt="" loading="lazy" decoding="async">
//!     <span class="search-item-body">
//!       <span class="search-item-title">Hello</span>
//!       <span class="search-item-snippet muted">An excerpt</span>
//!     </span>
//!   </a></li>
//! </ul>
//! ```

use crate::config::{Messages, SearchConfig};
use crate::types::{Query, SearchItem};
use crate::util::html::{escape_html, escape_html_keep_marks};
use crate::util::path::with_base_path;
use std::fmt::Write;

/// Which surface the markup is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Overlay opened from the header; no "type more" prompt
    Modal,
    /// Dedicated search page; prompts for a longer query
    Page,
}

/// Turns search results into the results-container markup.
#[derive(Debug, Clone)]
pub struct Renderer {
    base_path: String,
    placeholder: String,
    highlight_marks: bool,
    messages: Messages,
}

impl Renderer {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            base_path: config.base_path.clone(),
            placeholder: config.placeholder.clone(),
            highlight_marks: config.highlight_marks,
            messages: config.messages.clone(),
        }
    }

    /// Render the results container for one committed search.
    ///
    /// A query under two characters gets the "enter more characters" prompt on
    /// the search page. The modal treats it like any empty result set.
    pub fn render(&self, surface: Surface, query: &str, items: &[SearchItem]) -> String {
        if surface == Surface::Page && !Query::new(query).is_searchable() {
            return self.message(&self.messages.too_short);
        }
        self.render_items(items)
    }

    /// Render a result list, or the "nothing found" message when empty.
    pub fn render_items(&self, items: &[SearchItem]) -> String {
        if items.is_empty() {
            return self.message(&self.messages.nothing_found);
        }
        let mut html = String::from("<ul>");
        for item in items {
            self.render_item(&mut html, item);
        }
        html.push_str("</ul>");
        html
    }

    /// Link target for an item.
    pub fn href(&self, item: &SearchItem) -> String {
        with_base_path(&self.base_path, &item.path)
    }

    /// Thumbnail URL for an item, falling back to the placeholder asset.
    pub fn thumbnail(&self, item: &SearchItem) -> String {
        let src = item.thumbnail_src().unwrap_or(&self.placeholder);
        with_base_path(&self.base_path, src)
    }

    fn render_item(&self, html: &mut String, item: &SearchItem) {
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "<li><a class=\"search-item-card\" href=\"{href}\">\
             <img class=\"search-item-thumb\" src=\"{src}\" alt=\"\" loading=\"lazy\" decoding=\"async\">\
             <span class=\"search-item-body\"><span class=\"search-item-title\">{title}</span>",
            href = escape_html(&self.href(item)),
            src = escape_html(&self.thumbnail(item)),
            title = escape_html(&item.title),
        );
        if !item.snippet.is_empty() {
            let snippet = if self.highlight_marks {
                escape_html_keep_marks(&item.snippet)
            } else {
                escape_html(&item.snippet)
            };
            let _ = write!(
                html,
                "<span class=\"search-item-snippet muted\">{}</span>",
                snippet
            );
        }
        html.push_str("</span></a></li>");
    }

    fn message(&self, text: &str) -> String {
        format!("<p class=\"muted\">{}</p>", escape_html(text))
    }
}
