#![no_main]

use libfuzzer_sys::fuzz_target;
use notepub::fetch::decode_response;
use notepub::search::filter_items;
use notepub::{Query, Renderer, SearchConfig, Surface};

/// Fuzz target for untrusted `search.json` and endpoint bodies.
///
/// Decoding may fail but must not panic, and anything that decodes must
/// filter and render without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(response) = decode_response(body) else {
        return;
    };

    let renderer = Renderer::new(&SearchConfig::default());
    for item in &response.items {
        let query = Query::new(&item.title);
        let found = filter_items(&response.items, &query, 10);
        assert!(found.len() <= 10);
        let html = renderer.render(Surface::Page, query.as_str(), &found);
        assert!(!html.contains("<script"));
    }
});
