//! Dedicated search page with URL sync.

use crate::common::*;
use notepub::widget::PageView;
use notepub::{PageController, SearchConfig, TokioTimer};
use std::time::Duration;
use tokio::time::{sleep, Instant};

type Page = PageController<MockFetcher, TokioTimer, RecordingPageView, MemoryHistory>;

fn page(config: SearchConfig, fetcher: MockFetcher, location: &str) -> Page {
    let (engine, renderer) = engine_and_renderer(config, fetcher);
    PageController::new(
        engine,
        renderer,
        RecordingPageView::new(),
        MemoryHistory::new(location),
        TokioTimer,
    )
}

#[tokio::test(start_paused = true)]
async fn test_query_in_url_searches_immediately() {
    let fetcher = MockFetcher::new().json(
        "/search.json",
        &index_json(&[notepub::SearchItem::new("A test post", "/t")]),
    );
    let page = page(static_config(), fetcher.clone(), "https://example.com/search?q=test");

    let start = Instant::now();
    assert!(page.init().await);
    assert_eq!(start.elapsed(), Duration::ZERO);

    assert_eq!(page.view().input_value(), "test");
    assert_eq!(fetcher.calls(), ["/search.json"]);
    assert!(page.view().last_render().unwrap().contains("A test post"));
    assert_eq!(page.history().replaced(), ["/search?q=test"]);
}

#[tokio::test]
async fn test_no_query_in_url_does_nothing() {
    let fetcher = MockFetcher::new();
    for location in [
        "https://example.com/search",
        "https://example.com/search?q=",
        "https://example.com/search?q=%20%20",
        "/search?other=1",
    ] {
        let page = page(static_config(), fetcher.clone(), location);
        assert!(!page.init().await, "{location}");
        assert!(page.view().renders().is_empty());
        assert!(page.history().replaced().is_empty());
    }
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_url_query_is_decoded_and_trimmed() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let page = page(
        server_config(),
        fetcher.clone(),
        "https://example.com/search?q=+%D1%91%D0%B6+",
    );
    page.init().await;

    assert_eq!(page.view().input_value(), "ёж");
}

#[tokio::test]
async fn test_submit_searches_current_input() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let page = page(server_config(), fetcher.clone(), "https://example.com/search");

    page.view().type_text("xyz");
    assert!(page.submit().await);
    assert_eq!(fetcher.calls(), ["/v1/search?q=xyz&limit=10"]);
    assert_eq!(page.view().last_render().as_deref(), Some(NOTHING_FOUND));
    assert_eq!(page.history().replaced(), ["/search?q=xyz"]);
}

#[tokio::test]
async fn test_short_query_prompts_for_more() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let page = page(static_config(), fetcher.clone(), "https://example.com/search");

    page.view().type_text("a");
    page.submit().await;
    assert_eq!(page.view().last_render().as_deref(), Some(TOO_SHORT));
    assert_eq!(fetcher.call_count(), 0);
    assert_eq!(page.history().replaced(), ["/search?q=a"]);
}

#[tokio::test]
async fn test_empty_query_drops_the_parameter() {
    let page = page(static_config(), MockFetcher::new(), "https://example.com/search?q=old");

    page.view().type_text("   ");
    page.submit().await;
    assert_eq!(page.history().replaced(), ["/search"]);
    assert_eq!(page.view().last_render().as_deref(), Some(TOO_SHORT));
}

#[tokio::test]
async fn test_url_uses_base_path() {
    let fetcher = MockFetcher::new().json("/blog/search.json", &hello_world_index());
    let page = page(
        static_config().with_base_path("/blog"),
        fetcher,
        "https://example.com/blog/search",
    );

    page.view().type_text("hello world");
    page.submit().await;
    assert_eq!(page.history().replaced(), ["/blog/search?q=hello+world"]);
    assert!(page.view().last_render().unwrap().contains("href=\"/blog/a\""));
}

#[tokio::test(start_paused = true)]
async fn test_input_reads_value_when_debounce_fires() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let page = page(server_config(), fetcher.clone(), "https://example.com/search");

    page.view().type_text("ru");
    let (fired, ()) = tokio::join!(page.on_input(), async {
        sleep(Duration::from_millis(100)).await;
        page.view().type_text("rust");
    });

    assert!(fired);
    assert_eq!(fetcher.calls(), ["/v1/search?q=rust&limit=10"]);
}

#[tokio::test(start_paused = true)]
async fn test_submit_cancels_pending_input() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let page = page(server_config(), fetcher.clone(), "https://example.com/search");

    page.view().type_text("rust");
    let (typed, submitted) = tokio::join!(page.on_input(), async {
        sleep(Duration::from_millis(50)).await;
        page.submit().await
    });

    assert!(!typed);
    assert!(submitted);
    assert_eq!(fetcher.calls_to("/v1/search"), 1);
}
