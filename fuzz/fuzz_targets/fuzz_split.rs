#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, u8, u8)| {
    let (word, n, position) = data;
    let n = n as usize;
    // Splitting arbitrary UTF-8 must not panic on char boundaries
    let grams = nfind::search::split(word, n, false);
    assert_eq!(
        nfind::search::ngram_at(word, position as usize, n, false),
        grams.get(position as usize).cloned()
    );
    let _ = nfind::search::literal_offsets(word, grams.first().map_or("", String::as_str));
});
