//! Engine-level properties, run through the mock transport.

use crate::common::*;
use notepub::{SearchEngine, SearchItem};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = SearchItem> {
    ("[a-zA-Zа-я ]{0,20}", "[a-z ]{0,30}", "[a-z]{1,6}")
        .prop_map(|(title, snippet, slug)| {
            SearchItem::new(title, format!("/{}", slug)).with_snippet(snippet)
        })
}

fn run<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_static_results_bounded_and_matching(
        items in prop::collection::vec(item_strategy(), 0..40),
        query in "[a-z]{2,3}",
    ) {
        let fetcher = MockFetcher::new().json("/search.json", &index_json(&items));
        let engine = SearchEngine::new(static_config(), fetcher);
        let found = run(engine.search(&query));

        prop_assert!(found.len() <= 10);
        for item in &found {
            prop_assert!(
                item.title.to_lowercase().contains(&query)
                    || item.snippet.to_lowercase().contains(&query)
            );
        }
    }

    #[test]
    fn prop_short_queries_never_fetch(query in "\\s{0,3}\\PC?\\s{0,3}") {
        let fetcher = MockFetcher::new().json("/search.json", &hello_world_index());
        let engine = SearchEngine::new(static_config(), fetcher.clone());
        prop_assert!(run(engine.search(&query)).is_empty());
        prop_assert_eq!(fetcher.call_count(), 0);
    }
}
