// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser glue: binds the widgets to the theme's markup.
//!
//! The page calls [`boot`] once, after the DOM is parsed:
//!
//! ```js
//! import init, { boot } from "/assets/notepub.js";
//! await init();
//! boot({ basePath: "/blog", mode: "static" });
//! ```
//!
//! Passing `undefined` falls back to the legacy `window.__notepubBaseURL` and
//! `window.__notepubSearchMode` globals. Every initializer looks up the
//! elements it needs and quietly does nothing when they are absent, so the
//! same bundle runs on every page of the site.

use crate::anchors::AnchorAllocator;
use crate::config::SearchConfig;
use crate::debounce::Timer;
use crate::error::{ConfigError, FetchError};
use crate::fetch::Fetcher;
use crate::hub::{card_matches, HubHeader};
use crate::links::{classify_link, LinkKind, EXTERNAL_CLASS, MARKED_ATTR};
use crate::nav::{
    header_height_value, DrawerState, DrawerView, NavDrawer, BODY_LOCK_CLASS, HEADER_HEIGHT_VAR,
    OPEN_CLASS,
};
use crate::render::Renderer;
use crate::search::SearchEngine;
use crate::widget::{History, ModalView, ModalWidget, PageController, PageView};
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

const BASE_URL_GLOBAL: &str = "__notepubBaseURL";
const SEARCH_MODE_GLOBAL: &str = "__notepubSearchMode";

/// `requestIdleCallback` deadline, and the plain timeout used without it.
const IDLE_TIMEOUT_MS: u32 = 1200;
const IDLE_FALLBACK_MS: i32 = 350;

static BOOTED: AtomicBool = AtomicBool::new(false);

/// [`Fetcher`] over `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

fn js_error(url: &str, err: JsValue) -> FetchError {
    FetchError::transport(url, format!("{:?}", err))
}

impl Fetcher for BrowserFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or_else(|| FetchError::transport(url, "no window"))?;

        let headers = web_sys::Headers::new().map_err(|e| js_error(url, e))?;
        headers
            .set("Accept", "application/json")
            .map_err(|e| js_error(url, e))?;
        let init = web_sys::RequestInit::new();
        init.set_method("GET");
        init.set_headers(&headers);
        let request =
            web_sys::Request::new_with_str_and_init(url, &init).map_err(|e| js_error(url, e))?;

        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error(url, e))?
            .dyn_into()
            .map_err(|e| js_error(url, e))?;
        if !response.ok() {
            return Err(FetchError::status(url, response.status()));
        }

        let body = JsFuture::from(response.text().map_err(|e| js_error(url, e))?)
            .await
            .map_err(|e| js_error(url, e))?;
        body.as_string()
            .ok_or_else(|| FetchError::transport(url, "response body is not text"))
    }
}

/// [`Timer`] on `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

struct DomModalView {
    modal: Element,
    input: Option<HtmlInputElement>,
    results: Option<Element>,
}

impl ModalView for DomModalView {
    fn set_open(&self, open: bool) {
        let _ = self.modal.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self
            .modal
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
    }

    fn focus_input(&self) {
        if let Some(input) = &self.input {
            let _ = input.focus();
        }
    }

    fn show_results(&self, html: &str) {
        if let Some(results) = &self.results {
            results.set_inner_html(html);
        }
    }
}

struct DomPageView {
    input: HtmlInputElement,
    results: Element,
}

impl PageView for DomPageView {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_input_value(&self, value: &str) {
        self.input.set_value(value);
    }

    fn show_results(&self, html: &str) {
        self.results.set_inner_html(html);
    }
}

struct BrowserHistory {
    window: Window,
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn replace_url(&self, url: &str) {
        let Ok(history) = self.window.history() else {
            return;
        };
        let state = js_sys::Object::new();
        if let Err(err) = history.replace_state_with_url(&state, "", Some(url)) {
            debug!(url, error = ?err, "history.replaceState failed");
        }
    }
}

struct DomDrawerView {
    panel: Element,
    toggle: Element,
    body: Option<HtmlElement>,
}

impl DrawerView for DomDrawerView {
    fn apply(&self, state: DrawerState) {
        let open = state == DrawerState::Open;
        let _ = self.panel.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self.panel.set_attribute("aria-hidden", state.aria_hidden());
        if let Some(body) = &self.body {
            let _ = body.class_list().toggle_with_force(BODY_LOCK_CLASS, open);
        }
        let _ = self.toggle.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self.toggle.set_attribute("aria-label", state.toggle_label());
    }
}

type BrowserEngine = SearchEngine<BrowserFetcher>;

/// Wire every widget present on the page. Safe to call more than once; only
/// the first call does anything. Never throws: a bad config object is
/// reported on the console and the page globals are used instead.
#[wasm_bindgen]
pub fn boot(config: JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if BOOTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let config = page_config(&window, config);
    debug!(mode = %config.mode, base = %config.base_path, "booting");

    let renderer = Rc::new(Renderer::new(&config));
    let engine = Rc::new(SearchEngine::new(config, BrowserFetcher));

    init_search_modal(&document, Rc::clone(&engine), Rc::clone(&renderer));
    init_search_page(&window, &document, engine, renderer);
    init_hub_filters(&document);
    init_mobile_nav(&window, &document);
    init_anchors(&window, &document);

    let (w, d) = (window.clone(), document.clone());
    on_idle(&window, move || mark_external_links(&w, &d));
}

/// Explicit config object, or the legacy page globals.
fn page_config(window: &Window, config: JsValue) -> SearchConfig {
    let global = |name: &str| {
        js_sys::Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    let from_globals = || {
        SearchConfig::from_page_globals(
            global(BASE_URL_GLOBAL),
            global(SEARCH_MODE_GLOBAL).as_deref(),
        )
    };
    if config.is_undefined() || config.is_null() {
        return from_globals();
    }

    let candidate = serde_wasm_bindgen::from_value::<SearchConfig>(config)
        .map_err(|err| ConfigError::Object(err.to_string()));
    let (config, rejected) = SearchConfig::validated_or(candidate, from_globals);
    if let Some(err) = rejected {
        web_sys::console::error_1(&format!("notepub: {}; using page defaults", err).into());
    }
    config
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn elements(list: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements under `<main>`, or the whole document when there is none.
fn in_main(document: &Document, selector: &str) -> Vec<Element> {
    match query(document, "main") {
        Some(main) => elements(main.query_selector_all(selector)),
        None => elements(document.query_selector_all(selector)),
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::error_1(&format!("notepub: cannot listen for '{}'", event).into());
    }
    closure.forget();
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn on_idle(window: &Window, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let callback: &js_sys::Function = callback.unchecked_ref();
    if js_sys::Reflect::has(window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false) {
        let options = web_sys::IdleRequestOptions::new();
        options.set_timeout(IDLE_TIMEOUT_MS);
        if window
            .request_idle_callback_with_options(callback, &options)
            .is_ok()
        {
            return;
        }
    }
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback, IDLE_FALLBACK_MS);
}

fn init_search_modal(document: &Document, engine: Rc<BrowserEngine>, renderer: Rc<Renderer>) {
    let (Some(modal), Some(open_button)) = (
        query(document, "[data-search-modal]"),
        query(document, "[data-search-open]"),
    ) else {
        debug!("no search modal on this page");
        return;
    };
    let input = query(document, "[data-search-input]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let view = DomModalView {
        modal,
        input: input.clone(),
        results: query(document, "[data-search-results]"),
    };
    let widget = Rc::new(ModalWidget::new(engine, renderer, view, GlooTimer));

    let opener = Rc::clone(&widget);
    listen(&open_button, "click", move |_| {
        if opener.open() {
            if let Some(input) = &input {
                wire_modal_input(input, Rc::clone(&opener));
            }
        }
    });

    for button in elements(document.query_selector_all("[data-search-close]")) {
        let widget = Rc::clone(&widget);
        listen(&button, "click", move |_| widget.close());
    }

    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            widget.handle_key(&key.key());
        }
    });
}

fn wire_modal_input(
    input: &HtmlInputElement,
    widget: Rc<ModalWidget<BrowserFetcher, GlooTimer, DomModalView>>,
) {
    let source = input.clone();
    listen(input, "input", move |_| {
        let widget = Rc::clone(&widget);
        let value = source.value();
        spawn_local(async move {
            widget.on_input(&value).await;
        });
    });
}

fn init_search_page(
    window: &Window,
    document: &Document,
    engine: Rc<BrowserEngine>,
    renderer: Rc<Renderer>,
) {
    let form = query(document, "[data-search-page-form]");
    let input = query(document, "[data-search-page-input]")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let results = query(document, "[data-search-page-results]");
    let (Some(form), Some(input), Some(results)) = (form, input, results) else {
        debug!("no search page form on this page");
        return;
    };

    let history = BrowserHistory {
        window: window.clone(),
    };
    let view = DomPageView {
        input: input.clone(),
        results,
    };
    let controller = Rc::new(PageController::new(
        engine, renderer, view, history, GlooTimer,
    ));

    let submitter = Rc::clone(&controller);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = Rc::clone(&submitter);
        spawn_local(async move {
            controller.submit().await;
        });
    });

    let typer = Rc::clone(&controller);
    listen(&input, "input", move |_| {
        let controller = Rc::clone(&typer);
        spawn_local(async move {
            controller.on_input().await;
        });
    });

    spawn_local(async move {
        controller.init().await;
    });
}

fn init_hub_filters(document: &Document) {
    let Some(filters) = query(document, "[data-hub-filters]") else {
        return;
    };
    let cards = elements(document.query_selector_all("[data-article-card]"));
    if cards.is_empty() {
        return;
    }
    let title = query(document, "[data-blog-title]");
    let description = query(document, "[data-blog-description]");

    let buttons = filters.clone();
    listen(&filters, "click", move |event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        let Some(hub) = target.get_attribute("data-hub") else {
            return;
        };

        for button in elements(buttons.query_selector_all("[data-hub]")) {
            let _ = button
                .class_list()
                .toggle_with_force("is-active", button == target);
        }
        for card in &cards {
            let hubs = card.get_attribute("data-hubs").unwrap_or_default();
            let _ = card
                .class_list()
                .toggle_with_force("is-hidden", !card_matches(&hubs, &hub));
        }
        if let (Some(title), Some(description)) = (&title, &description) {
            let header = HubHeader::from_attrs(
                target.get_attribute("data-hub-title").as_deref(),
                target.get_attribute("data-hub-description").as_deref(),
            );
            title.set_text_content(Some(&header.title));
            description.set_text_content(Some(&header.description));
            if let Some(description) = description.dyn_ref::<HtmlElement>() {
                let _ = description.style().remove_property("display");
            }
        }
    });
}

fn init_mobile_nav(window: &Window, document: &Document) {
    let panel = query(document, "[data-nav-panel]");
    let toggle = query(document, "[data-nav-open]");
    let header = query(document, ".site-header").and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let (Some(panel), Some(toggle), Some(header)) = (panel, toggle, header) else {
        debug!("no navigation drawer on this page");
        return;
    };

    let drawer = Rc::new(NavDrawer::new(DomDrawerView {
        panel,
        toggle: toggle.clone(),
        body: document.body(),
    }));

    let toggler = Rc::clone(&drawer);
    listen(&toggle, "click", move |_| toggler.toggle());

    for button in elements(document.query_selector_all("[data-nav-close]")) {
        let drawer = Rc::clone(&drawer);
        listen(&button, "click", move |_| drawer.close());
    }

    listen(&header, "click", move |event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        if let Ok(Some(control)) = target.closest("a, button") {
            drawer.header_click(true, control.has_attribute("data-nav-open"));
        }
    });

    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let publish_height = move || {
        if let Some(root) = &root {
            let _ = root
                .style()
                .set_property(HEADER_HEIGHT_VAR, &header_height_value(header.offset_height()));
        }
    };
    publish_height();
    listen(window, "resize", move |_| publish_height());
}

/// Assign ids to `.prose` headings that lack one.
fn init_heading_anchors(document: &Document) {
    let mut anchors = AnchorAllocator::new();
    for heading in in_main(
        document,
        ".prose h1, .prose h2, .prose h3, .prose h4, .prose h5, .prose h6",
    ) {
        let text = heading.text_content().unwrap_or_default();
        let assigned = anchors.assign(&heading.id(), &text, |id| {
            document.get_element_by_id(id).is_some()
        });
        if let Some(id) = assigned {
            heading.set_id(&id);
        }
    }
}

fn location_hash(window: &Window) -> String {
    let raw = window.location().hash().unwrap_or_default();
    let raw = raw.trim_start_matches('#');
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

fn scroll_to(document: &Document, id: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(target) => {
            target.scroll_into_view();
            true
        }
        None => false,
    }
}

/// Anchors are generated right away when the page was opened on a fragment
/// (so it can be scrolled to), otherwise when the browser is idle.
fn init_anchors(window: &Window, document: &Document) {
    if location_hash(window).is_empty() {
        let d = document.clone();
        on_idle(window, move || init_heading_anchors(&d));
    } else {
        let (w, d) = (window.clone(), document.clone());
        let callback = Closure::once_into_js(move || {
            init_heading_anchors(&d);
            scroll_to(&d, &location_hash(&w));
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }

    let (w, d) = (window.clone(), document.clone());
    listen(window, "hashchange", move |_| {
        let hash = location_hash(&w);
        if hash.is_empty() || scroll_to(&d, &hash) {
            return;
        }
        init_heading_anchors(&d);
        scroll_to(&d, &hash);
    });
}

fn mark_external_links(window: &Window, document: &Document) {
    let Ok(page) = window
        .location()
        .href()
        .map_err(|_| ())
        .and_then(|href| Url::parse(&href).map_err(|_| ()))
    else {
        return;
    };
    for link in in_main(document, ".prose a[href]") {
        if link.get_attribute(MARKED_ATTR).as_deref() == Some("1") {
            continue;
        }
        let _ = link.set_attribute(MARKED_ATTR, "1");
        let href = link.get_attribute("href").unwrap_or_default();
        if classify_link(&href, &page) == LinkKind::External {
            let _ = link.class_list().add_1(EXTERNAL_CLASS);
        }
    }
}
