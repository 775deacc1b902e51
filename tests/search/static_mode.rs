//! Static index backend: fetch once, filter locally.

use crate::common::*;
use notepub::{SearchEngine, SearchItem};

#[tokio::test]
async fn test_hello_matches_one_item() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let engine = SearchEngine::new(static_config(), fetcher);

    let items = engine.search("hello").await;
    assert_eq!(paths(&items), ["/a"]);
    assert_eq!(items[0].title, "Hello World");
}

#[tokio::test]
async fn test_short_query_never_fetches() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let engine = SearchEngine::new(static_config(), fetcher.clone());

    for query in ["", " ", "h", "  h  ", "ё"] {
        assert!(engine.search(query).await.is_empty(), "{query:?}");
    }
    assert_eq!(fetcher.call_count(), 0);
    assert!(!engine.static_index().is_loaded());
}

#[tokio::test]
async fn test_query_is_trimmed() {
    let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
    let engine = SearchEngine::new(static_config(), fetcher);
    assert_eq!(paths(&engine.search("  other  ").await), ["/b"]);
}

#[tokio::test]
async fn test_snippet_matches_case_insensitively() {
    let body = index_json(&[
        SearchItem::new("Title", "/a").with_snippet("About WebAssembly"),
        SearchItem::new("Другое", "/b").with_snippet("Заметки про Rust"),
    ]);
    let fetcher = MockFetcher::new().json("/search.json", &body);
    let engine = SearchEngine::new(static_config(), fetcher);

    assert_eq!(paths(&engine.search("webassembly").await), ["/a"]);
    assert_eq!(paths(&engine.search("ЗАМЕТКИ").await), ["/b"]);
}

#[tokio::test]
async fn test_results_capped_at_ten_in_index_order() {
    let body = index_json(&numbered_items(25));
    let fetcher = MockFetcher::new().json("/search.json", &body);
    let engine = SearchEngine::new(static_config(), fetcher);

    let items = engine.search("post").await;
    assert_eq!(items.len(), 10);
    assert_eq!(items[0].path, "/posts/0");
    assert_eq!(items[9].path, "/posts/9");
}

#[tokio::test]
async fn test_configured_limit() {
    let body = index_json(&numbered_items(25));
    let fetcher = MockFetcher::new().json("/search.json", &body);
    let engine = SearchEngine::new(static_config().with_limit(3), fetcher);
    assert_eq!(engine.search("rust").await.len(), 3);
}

#[tokio::test]
async fn test_index_fetched_under_base_path() {
    let fetcher = MockFetcher::new().json("/blog/search.json", &hello_world_index());
    let engine = SearchEngine::new(static_config().with_base_path("/blog/"), fetcher.clone());

    assert_eq!(engine.search("hello").await.len(), 1);
    assert_eq!(fetcher.calls(), ["/blog/search.json"]);
}

#[tokio::test]
async fn test_missing_and_null_fields_tolerated() {
    let body = r#"{"items":[{"title":null,"path":"/a","snippet":"hello there"},{"path":"/b"}]}"#;
    let fetcher = MockFetcher::new().json("/search.json", body);
    let engine = SearchEngine::new(static_config(), fetcher);
    assert_eq!(paths(&engine.search("hello").await), ["/a"]);
}

#[tokio::test]
async fn test_missing_items_key_is_empty_index() {
    let fetcher = MockFetcher::new().json("/search.json", "{}");
    let engine = SearchEngine::new(static_config(), fetcher);
    assert!(engine.search("hello").await.is_empty());
    assert_eq!(engine.static_index().len(), Some(0));
}

#[tokio::test]
async fn test_unavailable_index_yields_nothing() {
    for response in [
        MockResponse::Status(404),
        MockResponse::Unreachable,
        MockResponse::Json("<!doctype html>".to_string()),
        MockResponse::Json(r#"{"items": [1, 2, 3]}"#.to_string()),
    ] {
        let fetcher = MockFetcher::new().route("/search.json", response);
        let engine = SearchEngine::new(static_config(), fetcher);
        assert!(engine.search("hello").await.is_empty());
    }
}
