// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two search surfaces: the header modal and the dedicated search page.
//!
//! Both drive the same [`SearchEngine`](crate::search::SearchEngine) and
//! [`Renderer`](crate::render::Renderer). They differ only in how they touch
//! the page, which is abstracted behind the view traits below. The browser
//! glue implements them over `web_sys` elements; tests implement them with
//! recording fakes.

pub mod modal;
pub mod page;

pub use modal::{ModalState, ModalWidget, Wiring};
pub use page::PageController;

/// DOM side of the modal: container, input and results container.
pub trait ModalView {
    /// Toggle the open class and `aria-hidden`.
    fn set_open(&self, open: bool);
    fn focus_input(&self);
    /// Replace the results container's markup.
    fn show_results(&self, html: &str);
}

/// DOM side of the search page form.
pub trait PageView {
    fn input_value(&self) -> String;
    fn set_input_value(&self, value: &str);
    fn show_results(&self, html: &str);
}

/// Browser history, reduced to what the page controller needs.
pub trait History {
    /// Full current URL (`location.href`).
    fn location(&self) -> String;
    /// Non-navigating replace of the current entry.
    fn replace_url(&self, url: &str);
}

impl<V: ModalView + ?Sized> ModalView for &V {
    fn set_open(&self, open: bool) {
        (**self).set_open(open);
    }

    fn focus_input(&self) {
        (**self).focus_input();
    }

    fn show_results(&self, html: &str) {
        (**self).show_results(html);
    }
}

impl<V: PageView + ?Sized> PageView for &V {
    fn input_value(&self) -> String {
        (**self).input_value()
    }

    fn set_input_value(&self, value: &str) {
        (**self).set_input_value(value);
    }

    fn show_results(&self, html: &str) {
        (**self).show_results(html);
    }
}

impl<H: History + ?Sized> History for &H {
    fn location(&self) -> String {
        (**self).location()
    }

    fn replace_url(&self, url: &str) {
        (**self).replace_url(url);
    }
}
