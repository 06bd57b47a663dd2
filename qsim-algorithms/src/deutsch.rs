//! # Deutsch e Deutsch–Jozsa
//!
//! Ambos usam phase kick-back: o alvo é preparado em |−⟩, de modo que o
//! oráculo `|x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩` devolve a fase (−1)^f(x) aos bits de
//! entrada. Uma única consulta a `f` basta.

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{ALL, QState, RandomSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado de um qubit |−⟩ = (|0⟩ − |1⟩)/√2
pub fn minus_state() -> AlgorithmResult<QState> {
    let zero = QState::from_bit_string("|0>")?;
    let one = QState::from_bit_string("|1>")?;
    Ok(zero.subtract(&one)?.normalize())
}

/// Calcula `(f(0) + f(1)) mod 2` com uma única avaliação de `f`
pub fn deutsch<F, R>(f: F, random: &mut R) -> AlgorithmResult<u64>
where
    F: Fn(u64) -> u64,
    R: RandomSource + ?Sized,
{
    let measurement = QState::from_bit_string("|01>")?
        .hadamard(ALL)?
        .apply_function(1, 0, f)?
        .hadamard(ALL)?
        .measure_with(1, random)?;

    tracing::debug!(result = measurement.result, "deutsch");
    Ok(measurement.result)
}

/// Classificação de uma função booleana prometida constante ou balanceada
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Constant,
    Balanced,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Constant => f.write_str("constant"),
            Verdict::Balanced => f.write_str("balanced"),
        }
    }
}

/// Decide se `f: {0..2^num_bits} → {0,1}` é constante ou balanceada
///
/// Bits de entrada `1..=num_bits`, alvo no bit 0.
pub fn deutsch_jozsa<F, R>(num_bits: usize, f: F, random: &mut R) -> AlgorithmResult<Verdict>
where
    F: Fn(u64) -> u64,
    R: RandomSource + ?Sized,
{
    if num_bits == 0 {
        return Err(AlgorithmError::InvalidInput(
            "deutsch-jozsa needs at least one input bit".to_string(),
        ));
    }

    let input = 1..=num_bits;
    let measurement = QState::new(num_bits)?
        .tensor_product(&minus_state()?)?
        .hadamard(input.clone())?
        .apply_function(input.clone(), 0, f)?
        .hadamard(input.clone())?
        .measure_with(input, random)?;

    let verdict = if measurement.result == 0 {
        Verdict::Constant
    } else {
        Verdict::Balanced
    };
    tracing::debug!(num_bits, result = measurement.result, %verdict, "deutsch-jozsa");
    Ok(verdict)
}
