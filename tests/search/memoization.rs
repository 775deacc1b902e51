//! The static index is fetched at most once per engine.

use crate::common::*;
use notepub::SearchEngine;
use std::time::Duration;

#[tokio::test]
async fn test_index_fetched_once_across_queries() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let engine = SearchEngine::new(static_config(), fetcher.clone());

    engine.search("hello").await;
    engine.search("other").await;
    engine.search("world").await;
    assert_eq!(fetcher.calls_to("/search.json"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_first_queries_share_one_fetch() {
    let fetcher = MockFetcher::new().route_with_latency(
        "/search.json",
        MockResponse::Json(hello_world_index()),
        Duration::from_millis(200),
    );
    let engine = SearchEngine::new(static_config(), fetcher.clone());

    let (first, second) = tokio::join!(engine.search("hello"), engine.search("other"));
    assert_eq!(paths(&first), ["/a"]);
    assert_eq!(paths(&second), ["/b"]);
    assert_eq!(fetcher.calls_to("/search.json"), 1);
}

#[tokio::test]
async fn test_failed_load_is_not_retried() {
    let fetcher = MockFetcher::new().route("/search.json", MockResponse::Status(500));
    let engine = SearchEngine::new(static_config(), fetcher.clone());

    assert!(engine.search("hello").await.is_empty());
    assert!(engine.search("hello").await.is_empty());
    assert_eq!(fetcher.calls_to("/search.json"), 1);
    assert_eq!(engine.static_index().len(), Some(0));
}

#[tokio::test]
async fn test_engines_do_not_share_indexes() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let a = SearchEngine::new(static_config(), fetcher.clone());
    let b = SearchEngine::new(static_config(), fetcher.clone());

    a.search("hello").await;
    b.search("hello").await;
    assert_eq!(fetcher.calls_to("/search.json"), 2);
}
