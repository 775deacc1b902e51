// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mobile navigation drawer.

use std::cell::Cell;

/// Class toggled on the panel and the toggle button.
pub const OPEN_CLASS: &str = "is-open";

/// Body class that locks page scrolling while the drawer is open.
pub const BODY_LOCK_CLASS: &str = "nav-open";

/// CSS custom property carrying the header height.
pub const HEADER_HEIGHT_VAR: &str = "--header-height";

pub const OPEN_LABEL: &str = "Открыть навигацию";
pub const CLOSE_LABEL: &str = "Закрыть навигацию";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open,
}

impl DrawerState {
    /// `aria-label` for the toggle button in this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DrawerState::Closed => OPEN_LABEL,
            DrawerState::Open => CLOSE_LABEL,
        }
    }

    /// `aria-hidden` for the panel in this state.
    pub fn aria_hidden(self) -> &'static str {
        match self {
            DrawerState::Closed => "true",
            DrawerState::Open => "false",
        }
    }
}

/// DOM side of the drawer.
pub trait DrawerView {
    fn apply(&self, state: DrawerState);
}

pub struct NavDrawer<V> {
    view: V,
    state: Cell<DrawerState>,
}

impl<V: DrawerView> NavDrawer<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: Cell::new(DrawerState::Closed),
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&self) {
        self.set(DrawerState::Open);
    }

    pub fn close(&self) {
        self.set(DrawerState::Closed);
    }

    pub fn toggle(&self) {
        match self.state.get() {
            DrawerState::Open => self.close(),
            DrawerState::Closed => self.open(),
        }
    }

    /// Click somewhere in the header. Links and buttons close the drawer,
    /// except the toggle itself, which has its own handler.
    pub fn header_click(&self, on_link_or_button: bool, on_toggle: bool) {
        if on_link_or_button && !on_toggle {
            self.close();
        }
    }

    fn set(&self, state: DrawerState) {
        self.state.set(state);
        self.view.apply(state);
    }
}

/// Value for [`HEADER_HEIGHT_VAR`].
pub fn header_height_value(offset_height: i32) -> String {
    format!("{}px", offset_height)
}
