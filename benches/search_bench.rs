//! Search benchmarks.
//!
//! Measures query evaluation against the built-in catalog and against
//! generated catalogs of growing size. Evaluation is a linear scan over the
//! precomputed lowercase surfaces, so time should grow linearly with entries.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `builtin` | Typical queries against the 14-entry site catalog |
//! | `scaling` | One query against generated catalogs from 100 to 100k entries |
//! | `build` | Catalog construction, including surface precomputation |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ketani::{Category, SearchCatalog, SearchEntry};

const WORDS: &[&str] = &[
    "freight", "harbour", "customs", "pallet", "container", "depot", "tariff", "border",
    "warehouse", "courier", "manifest", "reefer",
];

/// `n` entries; one in every twelve mentions "reefer".
fn generated_entries(n: usize) -> Vec<SearchEntry> {
    (0..n)
        .map(|i| {
            let word = WORDS[i % WORDS.len()];
            SearchEntry {
                title: format!("{} Route {i}", word.to_uppercase()),
                path: format!("/routes/{i}"),
                description: format!("Scheduled {word} service number {i}"),
                keywords: vec![word.to_string(), format!("lane-{}", i % 97)],
                category: Category::Service,
                is_download: false,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Built-in catalog
// ---------------------------------------------------------------------------

fn builtin_bench(c: &mut Criterion) {
    let catalog = SearchCatalog::builtin();
    let mut group = c.benchmark_group("builtin");

    for query in ["o", "logistics", "supply chain", "xyz", "   "] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, q| {
            b.iter(|| black_box(catalog.search(black_box(q))))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [100usize, 1_000, 10_000, 100_000] {
        let catalog = SearchCatalog::new(generated_entries(size)).expect("generated titles are non-empty");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("reefer", size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.search("REEFER")))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn build_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("builtin", |b| b.iter(SearchCatalog::builtin));

    let entries = generated_entries(10_000);
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("generated_10k", |b| {
        b.iter(|| SearchCatalog::new(black_box(entries.clone())))
    });

    group.finish();
}

criterion_group!(search_benches, builtin_bench, scaling_bench, build_bench);
criterion_main!(search_benches);
