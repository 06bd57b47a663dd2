//! # Bernstein–Vazirani
//!
//! Dado `f(x) = x·u (mod 2)`, recupera a string oculta `u` com uma consulta.

use crate::deutsch::minus_state;
use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{QState, RandomSource, parse_bit_string};

/// `f(x) = popcount(x & u)`; só o bit menos significativo chega ao alvo
pub fn hidden_string_function(hidden: &str) -> AlgorithmResult<impl Fn(u64) -> u64 + use<>> {
    let (hidden, _) = parse_bit_string(hidden)
        .map_err(|err| AlgorithmError::InvalidInput(err.to_string()))?;
    Ok(move |x: u64| u64::from((x & hidden).count_ones()))
}

/// Recupera `u` de `f` sobre `num_bits` bits; devolve a string binária
pub fn bernstein_vazirani<F, R>(f: F, num_bits: usize, random: &mut R) -> AlgorithmResult<String>
where
    F: Fn(u64) -> u64,
    R: RandomSource + ?Sized,
{
    if num_bits == 0 {
        return Err(AlgorithmError::InvalidInput(
            "bernstein-vazirani needs at least one input bit".to_string(),
        ));
    }

    let input = 1..=num_bits;
    let measurement = QState::new(num_bits)?
        .tensor_product(&minus_state()?)?
        .hadamard(input.clone())?
        .apply_function(input.clone(), 0, f)?
        .hadamard(input.clone())?
        .measure_with(input, random)?;

    let hidden = measurement.as_bit_string();
    tracing::debug!(%hidden, "bernstein-vazirani");
    Ok(hidden)
}
