//! Overlapping searches: a slow older response never replaces a newer one.

use crate::common::*;
use notepub::{ModalWidget, PageController, SearchItem, TokioTimer};
use std::time::Duration;
use tokio::time::sleep;

fn slow_ru_fast_rust() -> MockFetcher {
    MockFetcher::new()
        .route_with_latency(
            "/v1/search?q=ru&limit=10",
            MockResponse::Json(index_json(&[SearchItem::new("Ruby notes", "/ruby")])),
            Duration::from_millis(400),
        )
        .route_with_latency(
            "/v1/search?q=rust&limit=10",
            MockResponse::Json(index_json(&[SearchItem::new("Rust notes", "/rust")])),
            Duration::from_millis(20),
        )
}

#[tokio::test(start_paused = true)]
async fn test_modal_drops_stale_response() {
    let (engine, renderer) = engine_and_renderer(server_config(), slow_ru_fast_rust());
    let modal = ModalWidget::new(engine, renderer, RecordingModalView::new(), TokioTimer);

    let (older, newer) = tokio::join!(modal.run("ru"), async {
        sleep(Duration::from_millis(5)).await;
        modal.run("rust").await
    });

    assert!(!older);
    assert!(newer);
    let renders = modal.view().renders();
    assert_eq!(renders.len(), 1);
    assert!(renders[0].contains("Rust notes"));
    assert!(!renders[0].contains("Ruby notes"));
}

#[tokio::test(start_paused = true)]
async fn test_page_drops_stale_response() {
    let fetcher = slow_ru_fast_rust();
    let (engine, renderer) = engine_and_renderer(server_config(), fetcher.clone());
    let page = PageController::new(
        engine,
        renderer,
        RecordingPageView::new(),
        MemoryHistory::new("https://example.com/search"),
        TokioTimer,
    );

    let (older, newer) = tokio::join!(page.run("ru"), async {
        sleep(Duration::from_millis(5)).await;
        page.run("rust").await
    });

    assert_eq!((older, newer), (false, true));
    assert!(page.view().last_render().unwrap().contains("Rust notes"));
    assert_eq!(page.view().renders().len(), 1);
    assert_eq!(fetcher.calls_to("/v1/search"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_in_order_responses_all_render() {
    let (engine, renderer) = engine_and_renderer(server_config(), slow_ru_fast_rust());
    let modal = ModalWidget::new(engine, renderer, RecordingModalView::new(), TokioTimer);

    assert!(modal.run("ru").await);
    assert!(modal.run("rust").await);
    assert_eq!(modal.view().renders().len(), 2);
}
