//! # QFT Benchmarks
//!
//! Quantum Fourier transform on basis and periodic states.
//! O(k²) gates over the populated states.
//!
//! Run: `cargo bench --bench qft_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsim_core::{ALL, QState};

/// Benchmark QFT of a basis state
fn bench_qft_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_basis");

    for num_bits in [3usize, 6, 9] {
        let state = QState::with_amplitudes(num_bits, [(1, qsim_core::Complex::ONE)]).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(num_bits), &state, |b, state| {
            b.iter(|| black_box(state.qft(ALL).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark QFT of a state with period 4 in the input register
fn bench_qft_periodic(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_periodic");

    let state = QState::new(10)
        .and_then(|s| s.hadamard(2..=9))
        .and_then(|s| s.apply_function(2..=9, 0..=1, |x| x % 4))
        .unwrap();

    group.bench_function("8_input_bits", |b| {
        b.iter(|| black_box(state.qft(2..=9).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_qft_basis, bench_qft_periodic);

criterion_main!(benches);
