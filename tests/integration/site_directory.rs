//! The engine and renderer over a `public/` directory on disk.

use crate::common::*;
use notepub::fetch::site::SiteFetcher;
use notepub::{Renderer, SearchEngine, SearchItem, Surface};

#[tokio::test]
async fn test_static_search_over_site_directory() {
    let site = tempfile::tempdir().unwrap();
    write_index(site.path(), "search.json", &hello_world_index());

    let engine = SearchEngine::new(static_config(), SiteFetcher::new(site.path()));
    assert_eq!(paths(&engine.search("hello").await), ["/a"]);
}

#[tokio::test]
async fn test_site_mounted_under_base_path() {
    let site = tempfile::tempdir().unwrap();
    let items = [SearchItem::new("Hello World", "/posts/hello")
        .with_snippet("First post")
        .with_thumbnail("img/hello.png")];
    write_index(site.path(), "search.json", &index_json(&items));

    let config = static_config().with_base_path("/blog/");
    let renderer = Renderer::new(&config);
    let engine = SearchEngine::new(config, SiteFetcher::new(site.path()).mounted_at("/blog/"));

    let found = engine.search("first").await;
    let html = renderer.render(Surface::Page, "first", &found);
    assert!(html.contains("href=\"/blog/posts/hello\""));
    assert!(html.contains("src=\"/blog/img/hello.png\""));
    assert!(html.contains("First post"));
}

#[tokio::test]
async fn test_missing_index_file_is_nothing_found() {
    let site = tempfile::tempdir().unwrap();
    let config = static_config();
    let renderer = Renderer::new(&config);
    let engine = SearchEngine::new(config, SiteFetcher::new(site.path()));

    let found = engine.search("hello").await;
    assert_eq!(renderer.render(Surface::Modal, "hello", &found), NOTHING_FOUND);
}

#[tokio::test]
async fn test_server_mode_against_site_directory_is_empty() {
    // Query strings never map to files.
    let site = tempfile::tempdir().unwrap();
    write_index(site.path(), "v1/search", &hello_world_index());

    let engine = SearchEngine::new(server_config(), SiteFetcher::new(site.path()));
    assert!(engine.search("hello").await.is_empty());
}
