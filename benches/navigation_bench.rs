//! SortedArraySet construction and navigation benchmark.
//!
//! Measures bulk construction from unsorted input, single binary-search
//! navigation over the full window, and zero-copy derivation plus iteration.
//!
//! Pre-generated Vec is reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use navset::SortedArraySet;
use std::hint::black_box;

const SIZES: [i32; 4] = [100, 1000, 10000, 100000];

/// Pre-generates an unsorted Vec for each size to be reused in benchmarks.
fn generate_unsorted_vec(size: i32) -> Vec<i32> {
    // Stride through the range so the input is thoroughly out of order.
    (0..size).map(|value| (value * 7919) % size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_from_collection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_from_collection");

    for size in SIZES {
        let base_vec = generate_unsorted_vec(size);
        group.bench_with_input(
            BenchmarkId::new("from_collection", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| black_box(SortedArraySet::from_collection(black_box(elements))),
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_navigation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_navigation");

    for size in SIZES {
        let set = SortedArraySet::from_collection(generate_unsorted_vec(size));
        group.bench_with_input(BenchmarkId::new("floor_ceiling", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let probe = black_box(size / 2);
                (
                    black_box(set.floor(&probe)),
                    black_box(set.ceiling(&probe)),
                    black_box(set.contains(&probe)),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_derive_and_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_array_set_derive_and_iterate");

    for size in SIZES {
        let set = SortedArraySet::from_collection(generate_unsorted_vec(size));
        let from = size / 4;
        let to = size / 2;
        group.bench_with_input(BenchmarkId::new("sub_set_iter", size), &size, |bencher, _| {
            bencher.iter(|| {
                let window = set
                    .sub_set(black_box(&from), true, black_box(&to), false)
                    .expect("bounds are ordered");
                black_box(window.iter().copied().sum::<i32>())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_collection,
    benchmark_navigation,
    benchmark_derive_and_iterate
);
criterion_main!(benches);
