//! # Busca de Grover
//!
//! Encontra o único `x < 2^n` com `f(x) = 1` em ~π/4·√(2^n) consultas.
//! Entrada nos bits `1..=n`, alvo no bit 0 preparado em |−⟩ pelo Hadamard
//! aplicado a |1⟩.

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{ALL, QState, RandomSource};
use std::f64::consts::FRAC_PI_4;

/// Rodadas completas antes de desistir
pub const MAX_ATTEMPTS: u32 = 6;

/// Número de amplificações para um espaço de `2^num_bits` elementos
pub fn amplifications(num_bits: usize) -> usize {
    let range = (num_bits as f64).exp2();
    (range.sqrt() * FRAC_PI_4).floor() as usize
}

/// Procura `x` com `f(x) == 1`; repete a busca quando a medição falha
pub fn search<F, R>(num_bits: usize, f: F, random: &mut R) -> AlgorithmResult<u64>
where
    F: Fn(u64) -> u64,
    R: RandomSource + ?Sized,
{
    if num_bits == 0 || num_bits >= qsim_core::MAX_BITS {
        return Err(AlgorithmError::InvalidInput(format!(
            "grover search needs between 1 and {} input bits (got {num_bits})",
            qsim_core::MAX_BITS - 1
        )));
    }

    let input = 1..=num_bits;
    let rounds = amplifications(num_bits);

    for attempt in 1..=MAX_ATTEMPTS {
        let mut state = QState::new(num_bits)?
            .tensor_product(&QState::from_bit_string("|1>")?)?
            .hadamard(ALL)?;

        for round in 0..rounds {
            // inverte a fase do elemento procurado
            state = state.apply_function(input.clone(), 0, &f)?;
            // reflexão sobre a média
            state = state
                .hadamard(input.clone())?
                .apply_function(input.clone(), 0, |x| u64::from(x == 0))?
                .hadamard(input.clone())?;
            tracing::trace!(round, "amplified");
        }

        let result = state.measure_with(input.clone(), random)?.result;
        if f(result) == 1 {
            tracing::debug!(result, attempt, "grover found");
            return Ok(result);
        }
        tracing::debug!(result, attempt, "grover measured a wrong value");
    }

    Err(AlgorithmError::GaveUp {
        attempts: MAX_ATTEMPTS,
    })
}
