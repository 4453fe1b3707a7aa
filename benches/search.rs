//! Search benchmarks
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nfind::search::{FuzzySearch, SearchConfig, build_tables};

const WORDS: &[&str] = &[
    "hello", "helo", "yellow", "hallo", "help", "shell", "world", "word", "would", "wild",
    "search", "serach", "researcher", "engine", "engines", "tolerance", "tolerant", "table",
];

/// Build a text of `count` words cycling through `WORDS`
fn make_text(count: usize) -> String {
    WORDS
        .iter()
        .cycle()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_build_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tables");

    for query in ["hello", "researcher", "internationalization"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| build_tables(black_box(query), 2, 2, false))
        });
    }

    group.finish();
}

fn bench_find_text_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_text_size");

    for count in [1_000, 10_000, 100_000] {
        let search = FuzzySearch::new(make_text(count), SearchConfig::new(false, 3, 1))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(count), &search, |b, search| {
            b.iter(|| search.find(black_box("serch")))
        });
    }

    group.finish();
}

fn bench_find_tolerance(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_tolerance");
    let text = make_text(20_000);

    for k in [0, 1, 2, 4] {
        let search = FuzzySearch::new(text.clone(), SearchConfig::new(false, 2, k))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(k), &search, |b, search| {
            b.iter(|| search.find(black_box("tolerance")))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_tables,
    bench_find_text_size,
    bench_find_tolerance
);
criterion_main!(benches);
