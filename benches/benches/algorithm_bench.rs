//! # Algorithm Benchmarks
//!
//! End-to-end runs of the textbook algorithms with a seeded generator.
//!
//! Run: `cargo bench --bench algorithm_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qsim_algorithms::{bernstein_vazirani, grover, hidden_string_function, shor};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark Bernstein-Vazirani on an 8-bit hidden string
fn bench_bernstein_vazirani(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("bernstein_vazirani_8", |b| {
        b.iter(|| {
            let f = hidden_string_function("10110101").unwrap();
            black_box(bernstein_vazirani(f, 8, &mut rng).unwrap())
        })
    });
}

/// Benchmark Grover search over 6 bits
fn bench_grover(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    c.bench_function("grover_6", |b| {
        b.iter(|| black_box(grover::search(6, |x| u64::from(x == 42), &mut rng).unwrap()))
    });
}

/// Benchmark factoring 15
fn bench_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("shor");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(3);
    group.bench_function("factor_15", |b| {
        b.iter(|| black_box(shor::factor(15, &mut rng).ok()))
    });

    group.finish();
}

criterion_group!(benches, bench_bernstein_vazirani, bench_grover, bench_factor);

criterion_main!(benches);
