#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nfind::search::{FuzzySearch, SearchConfig};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    query: &'a str,
    case_sensitive: bool,
    n: u8,
    k: u8,
}

fuzz_target!(|input: Input<'_>| {
    let config = SearchConfig::new(input.case_sensitive, input.n as usize, input.k as usize);
    // Invalid n is rejected at construction, never during a query
    let Ok(search) = FuzzySearch::new(input.text, config) else {
        return;
    };

    let results = search.find(input.query);
    let chars = input.text.chars().count();
    for (word, offsets) in &results {
        assert!(!word.is_empty());
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(offsets.iter().all(|&offset| offset < chars));
    }
});
