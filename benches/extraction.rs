//! Benchmarks for intent extraction.
//!
//! Pattern extraction is on the request path for every search that falls
//! back, so it should stay well under a millisecond.

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use shopsight::extract::{detect_max_price, extract_intent};

/// Sample prompts of varying complexity.
const SHORT_PROMPT: &str = "grey armchair max 3000";
const MEDIUM_PROMPT: &str = "a white couch under R12,500 for a small studio apartment";
const LONG_PROMPT: &str = "I'm furnishing a compact apartment and looking for a scandinavian \
    style sofa or loveseat in beige or cream, plus maybe a small coffee table and a bookshelf, \
    all together under 25,000 if possible";

fn bench_pattern_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_extraction");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("short_prompt", |b| {
        b.iter(|| extract_intent(black_box(SHORT_PROMPT)));
    });

    group.bench_function("medium_prompt", |b| {
        b.iter(|| extract_intent(black_box(MEDIUM_PROMPT)));
    });

    group.bench_function("long_prompt", |b| {
        b.iter(|| extract_intent(black_box(LONG_PROMPT)));
    });

    group.finish();
}

fn bench_price_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_detection");

    let inputs = [
        ("plain", "under 2000"),
        ("grouped", "between R1,500 and R12,500.00"),
        ("none", "a comfy grey sofa with no budget mentioned"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| detect_max_price(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pattern_extraction, bench_price_detection);
criterion_main!(benches);
