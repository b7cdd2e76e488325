//! Benchmarks for catalog search and per-keystroke session updates.
//!
//! The built-in catalog is tiny, so the numbers that matter are per-keystroke
//! latency and how the linear scan scales if a site ships a bigger catalog.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docsearch::testing::make_entry;
use docsearch::{search, Catalog, Direction, SearchSession};

/// Catalog sizes for the scaling benchmark
const CATALOG_SIZES: &[usize] = &[64, 256, 1024, 4096];

/// Vocabulary for synthetic catalogs
const WORDS: &[&str] = &[
    "mqtt", "widget", "camera", "screen", "preset", "layout", "audio", "video", "stream",
    "kiosk", "device", "command", "window", "sensor", "browser", "schedule",
];

fn synthetic_catalog(size: usize) -> Catalog {
    Catalog::new(
        (0..size)
            .map(|i| {
                let title = format!("{} {} {}", WORDS[i % WORDS.len()], WORDS[(i * 7) % WORDS.len()], i);
                let tags = format!("{} {}", WORDS[(i * 3) % WORDS.len()], WORDS[(i * 5) % WORDS.len()]);
                make_entry(&title, &tags)
            })
            .collect(),
    )
}

fn bench_builtin_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_search");
    let catalog = Catalog::builtin();

    let queries = [
        ("single_term", "camera"),
        ("multi_term", "home assistant"),
        ("broad", "widget"),
        ("single_char", "e"),
        ("no_match", "xyznonexistent"),
        ("anchor", "hmac"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("search", name), &query, |b, query| {
            b.iter(|| search(black_box(&catalog), black_box(query)));
        });
    }

    group.finish();
}

fn bench_typing(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let keystrokes: Vec<String> = (1..="media player".len())
        .map(|n| "media player"[..n].to_string())
        .collect();

    c.bench_function("session/type_media_player", |b| {
        b.iter(|| {
            let mut session = SearchSession::new();
            for text in &keystrokes {
                session.on_query_changed(black_box(&catalog), black_box(text));
            }
            session.move_selection(Direction::Next);
            session.activate_selection()
        });
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_scaling");

    for &size in CATALOG_SIZES {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("two_terms", size), &catalog, |b, catalog| {
            b.iter(|| search(black_box(catalog), black_box("camera stream")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_builtin_search, bench_typing, bench_scaling);

criterion_main!(benches);
