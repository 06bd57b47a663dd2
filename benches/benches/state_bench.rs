//! # QState Benchmarks
//!
//! Measures the gate engine: single-bit gates, controlled gates, oracles,
//! swaps and measurement over registers of growing width.
//! Cost is O(targets × populated states).
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsim_core::{ALL, FixedRandom, QState};

fn uniform(num_bits: usize) -> QState {
    QState::new(num_bits).and_then(|s| s.hadamard(ALL)).unwrap()
}

/// Benchmark construction and parsing
fn bench_state_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_creation");

    group.bench_function("new_16", |b| b.iter(|| black_box(QState::new(16).unwrap())));

    group.bench_function("from_bit_string", |b| {
        b.iter(|| black_box(QState::from_bit_string("|0110100101>").unwrap()))
    });

    group.finish();
}

/// Benchmark Hadamard over every bit (populates 2^n states)
fn bench_hadamard_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_all");

    for num_bits in [4usize, 8, 12] {
        let state = QState::new(num_bits).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(num_bits), &state, |b, state| {
            b.iter(|| black_box(state.hadamard(ALL).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark controlled gates on a populated register
fn bench_controlled(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled");
    let state = uniform(10);

    group.bench_function("cnot", |b| b.iter(|| black_box(state.cnot(0, 9).unwrap())));

    group.bench_function("toffoli", |b| {
        b.iter(|| black_box(state.toffoli(&[0, 1, 9]).unwrap()))
    });

    group.bench_function("controlled_r", |b| {
        b.iter(|| black_box(state.controlled_r(3, 7, 0.25).unwrap()))
    });

    group.bench_function("controlled_swap", |b| {
        b.iter(|| black_box(state.controlled_swap(0, 4, 8).unwrap()))
    });

    group.finish();
}

/// Benchmark classical oracles
fn bench_apply_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_function");

    for num_bits in [6usize, 10] {
        let state = uniform(num_bits);
        let input = 1..=num_bits - 1;
        group.bench_with_input(BenchmarkId::from_parameter(num_bits), &state, |b, state| {
            b.iter(|| black_box(state.apply_function(input.clone(), 0, |x| x % 3).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark measurement
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let state = uniform(10);

    group.bench_function("one_bit", |b| {
        b.iter(|| black_box(state.measure_with(5, &mut FixedRandom(0.37)).unwrap()))
    });

    group.bench_function("all_bits", |b| {
        b.iter(|| black_box(state.measure_with(ALL, &mut FixedRandom(0.37)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_state_creation,
    bench_hadamard_all,
    bench_controlled,
    bench_apply_function,
    bench_measure,
);

criterion_main!(benches);
