#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notepub::util::path::{is_absolute_url, trim_base, with_base_path};

#[derive(Debug, Arbitrary)]
struct Input {
    base_path: String,
    path: String,
}

/// Fuzz target for joining site paths onto the base path.
///
/// - Absolute `http(s)` URLs come back verbatim
/// - Everything else starts with the trimmed base
/// - The result is never empty
fuzz_target!(|input: Input| {
    let joined = with_base_path(&input.base_path, &input.path);
    assert!(!joined.is_empty());

    if is_absolute_url(&input.path) {
        assert_eq!(joined, input.path);
        return;
    }

    assert!(joined.starts_with(trim_base(&input.base_path)));
    if !input.path.is_empty() {
        assert!(joined.ends_with(input.path.trim_start_matches('/')));
    }
});
