//! Criterion micro-benchmarks for pattern search.

use bitmatrix_bench::reference_grid;
use bitmatrix_pattern::{find_approximate, find_exact, generate_seeded, PatternKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_search(c: &mut Criterion) {
    let grid = reference_grid(11);
    let needle = generate_seeded(PatternKind::Cube, &[3, 3, 3], 0).unwrap();

    let mut group = c.benchmark_group("search_32k_3x3x3");
    group.sample_size(20);
    group.bench_function("find_exact", |b| {
        b.iter(|| find_exact(black_box(&grid), &needle).unwrap());
    });
    group.bench_function("find_approximate_0.8", |b| {
        b.iter(|| find_approximate(black_box(&grid), &needle, 0.8).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
