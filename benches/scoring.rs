//! Benchmarks for relevance scoring and selection.

// Criterion macros generate items without docs - this is expected for benchmarks
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use shopsight::models::{Product, ScoredProduct, SearchIntent, Specifications};
use shopsight::search::{TEXT_WEIGHTS, rank, score_product};

fn sample_product(i: usize) -> Product {
    Product {
        id: format!("p-{i}"),
        name: format!("Stockholm Grey Sofa {i}"),
        description: "A three-seater sofa in soft grey fabric with oak legs".to_string(),
        category: "Living Room".to_string(),
        subcategory: Some("Sofas".to_string()),
        price: 5999.0,
        discount: 0.0,
        tags: vec!["sofa".to_string(), "fabric".to_string()],
        specifications: Specifications {
            colors: vec!["Grey".to_string(), "Light Grey".to_string()],
            style: vec!["Scandinavian".to_string()],
            space_efficient: false,
        },
        in_stock: true,
    }
}

fn sample_intent() -> SearchIntent {
    let mut intent = SearchIntent::new();
    intent.push_furniture_type("sofa");
    intent.push_color("grey");
    intent.push_style("scandinavian");
    intent.record_price(8000.0);
    intent
}

fn bench_score_product(c: &mut Criterion) {
    let product = sample_product(0);
    let intent = sample_intent();

    c.bench_function("score_product", |b| {
        b.iter(|| score_product(black_box(&product), black_box(&intent), &TEXT_WEIGHTS));
    });
}

fn bench_rank_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_candidates");
    let intent = sample_intent();

    for size in [10usize, 50, 200] {
        let scored: Vec<ScoredProduct> = (0..size)
            .map(|i| {
                let product = sample_product(i);
                let relevance_score = score_product(&product, &intent, &TEXT_WEIGHTS);
                ScoredProduct {
                    product,
                    relevance_score,
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &scored, |b, scored| {
            b.iter(|| rank(black_box(scored.clone()), 20));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_product, bench_rank_candidates);
criterion_main!(benches);
