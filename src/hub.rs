// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hub filter on the blog index.
//!
//! Article cards list their hubs in a whitespace-separated `data-hubs`
//! attribute. Clicking a `[data-hub]` button hides the cards outside that
//! hub (`all` shows everything) and swaps the page header for the hub's
//! title and description.

/// Selector value that matches every card.
pub const ALL_HUBS: &str = "all";

/// Header title when the button does not carry `data-hub-title`.
pub const DEFAULT_HUB_TITLE: &str = "Последние публикации по всем хабам";

/// Header description when the button does not carry `data-hub-description`.
pub const DEFAULT_HUB_DESCRIPTION: &str = "Выберите хаб, чтобы отфильтровать статьи.";

/// Whether a card tagged with `card_hubs` stays visible under `selected`.
pub fn card_matches(card_hubs: &str, selected: &str) -> bool {
    selected == ALL_HUBS || card_hubs.split_whitespace().any(|hub| hub == selected)
}

/// Header text shown after selecting a hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubHeader {
    pub title: String,
    pub description: String,
}

impl HubHeader {
    /// Build from the button's attributes. Missing or empty values fall back
    /// to the defaults.
    pub fn from_attrs(title: Option<&str>, description: Option<&str>) -> Self {
        fn or_default(value: Option<&str>, default: &str) -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }
        Self {
            title: or_default(title, DEFAULT_HUB_TITLE),
            description: or_default(description, DEFAULT_HUB_DESCRIPTION),
        }
    }
}
