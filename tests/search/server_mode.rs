//! Remote endpoint backend: one request per committed query.

use crate::common::*;
use notepub::{SearchEngine, SearchItem, SearchMode};

#[tokio::test]
async fn test_sends_encoded_query_and_limit() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let engine = SearchEngine::new(server_config().with_base_path("/blog"), fetcher.clone());

    engine.search(" rust & wasm ").await;
    assert_eq!(fetcher.calls(), ["/blog/v1/search?q=rust+%26+wasm&limit=10"]);
}

#[tokio::test]
async fn test_items_returned_verbatim() {
    // The endpoint ranks and filters; nothing is re-filtered or re-ordered.
    let body = index_json(&[
        SearchItem::new("Zeta", "/z"),
        SearchItem::new("Unrelated to the query", "/u"),
    ]);
    let fetcher = MockFetcher::new().json("/v1/search", &body);
    let engine = SearchEngine::new(server_config(), fetcher);

    assert_eq!(paths(&engine.search("rust").await), ["/z", "/u"]);
}

#[tokio::test]
async fn test_every_query_hits_the_endpoint() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let engine = SearchEngine::new(server_config(), fetcher.clone());

    engine.search("rust").await;
    engine.search("rust").await;
    engine.search("wasm").await;
    assert_eq!(fetcher.calls_to("/v1/search"), 3);
    assert_eq!(fetcher.calls_to("/search.json"), 0);
}

#[tokio::test]
async fn test_short_query_never_fetches() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":[]}"#);
    let engine = SearchEngine::new(server_config(), fetcher.clone());

    assert!(engine.search("r").await.is_empty());
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_failures_become_empty_results() {
    for response in [
        MockResponse::Status(500),
        MockResponse::Status(404),
        MockResponse::Unreachable,
        MockResponse::Json("not json".to_string()),
    ] {
        let fetcher = MockFetcher::new().route("/v1/search", response);
        let engine = SearchEngine::new(server_config(), fetcher);
        assert!(engine.search("rust").await.is_empty());
    }
}

#[tokio::test]
async fn test_null_items_is_empty() {
    let fetcher = MockFetcher::new().json("/v1/search", r#"{"items":null}"#);
    let engine = SearchEngine::new(server_config(), fetcher);
    assert!(engine.search("rust").await.is_empty());
}

#[tokio::test]
async fn test_explicit_mode_overrides_config() {
    let fetcher = MockFetcher::new()
        .json("/search.json", &hello_world_index())
        .json("/v1/search", r#"{"items":[]}"#);
    let engine = SearchEngine::new(server_config(), fetcher.clone());

    let items = engine.search_with_mode("hello", SearchMode::Static).await;
    assert_eq!(paths(&items), ["/a"]);
    assert_eq!(fetcher.calls(), ["/search.json"]);
}
