//! Benchmark for the iteration core and its derived operations.
//!
//! Measures the cost of `each`-based traversal against the collection
//! sizes a utility library typically sees.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use funcol::collection::{filter, map, reduce, Collection};
use std::hint::black_box;

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in [10, 100, 1000] {
        let collection = Collection::from((0..size).collect::<Vec<i64>>());
        group.bench_with_input(BenchmarkId::new("sum", size), &collection, |bencher, collection| {
            bencher.iter(|| {
                let sum = reduce(black_box(collection), 0i64, |accumulator, value| {
                    accumulator + value
                });
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    let collection = Collection::from((0..1000).collect::<Vec<i64>>());
    group.bench_function("map_double", |bencher| {
        bencher.iter(|| black_box(map(black_box(&collection), |value| value * 2)));
    });
    group.bench_function("filter_even", |bencher| {
        bencher.iter(|| black_box(filter(black_box(&collection), |value| value % 2 == 0)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_reduce, benchmark_map_filter);
criterion_main!(benches);
