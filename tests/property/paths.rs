//! Base-path joining and query parameter properties.

use notepub::util::path::{encode_query, query_param, with_base_path};
use notepub::SearchConfig;
use proptest::prelude::*;

fn base_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        "/[a-z]{1,8}",
        "/[a-z]{1,8}/",
        "/[a-z]{1,6}/[a-z]{1,6}",
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    "/?[a-z0-9]{1,8}(/[a-z0-9.-]{1,8}){0,3}"
}

proptest! {
    #[test]
    fn prop_joined_path_starts_with_slash(base in base_strategy(), path in path_strategy()) {
        let joined = with_base_path(&base, &path);
        prop_assert!(joined.starts_with('/'));
        prop_assert!(!joined.starts_with("//"));
    }

    #[test]
    fn prop_joined_path_keeps_base_prefix(base in base_strategy(), path in path_strategy()) {
        let trimmed = base.trim_end_matches('/');
        let joined = with_base_path(&base, &path);
        prop_assert!(joined.starts_with(trimmed));
        prop_assert!(joined.ends_with(path.trim_start_matches('/')));
    }

    #[test]
    fn prop_no_double_slash_at_the_seam(base in base_strategy(), path in path_strategy()) {
        let trimmed = base.trim_end_matches('/');
        let joined = with_base_path(&base, &path);
        prop_assert!(!joined[trimmed.len()..].starts_with("//"));
    }

    #[test]
    fn prop_absolute_urls_untouched(
        base in base_strategy(),
        host in "[a-z]{1,10}\\.(com|org|dev)",
        rest in "(/[a-z0-9]{1,8}){0,3}",
        secure in any::<bool>(),
    ) {
        let scheme = if secure { "https" } else { "http" };
        let url = format!("{scheme}://{host}{rest}");
        prop_assert_eq!(with_base_path(&base, &url), url);
    }

    #[test]
    fn prop_query_round_trips_through_page_url(query in "\\PC{1,20}") {
        let trimmed = query.trim().to_string();
        let config = SearchConfig::default().with_base_path("/blog");
        let url = config.search_page_url(&trimmed);
        prop_assert_eq!(query_param(&url, "q"), trimmed);
    }

    #[test]
    fn prop_encoded_query_has_no_raw_separators(value in "\\PC{0,20}") {
        let encoded = encode_query(&[("q", &value)]);
        let raw = encoded.strip_prefix("q=").unwrap_or(&encoded);
        prop_assert!(!raw.contains('&'));
        prop_assert!(!raw.contains('#'));
        prop_assert!(!raw.contains(' '));
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(with_base_path("/blog", "/posts/a"), "/blog/posts/a");
    assert_eq!(with_base_path("/blog", "https://x.com/y"), "https://x.com/y");
    assert_eq!(with_base_path("/blog", ""), "/blog");
    assert_eq!(with_base_path("", ""), "/");
}
