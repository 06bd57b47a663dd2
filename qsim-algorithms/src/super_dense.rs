//! # Codificação super densa
//!
//! Alice e Bob compartilham um par de Bell. Alice codifica dois bits
//! clássicos no seu qubit (bit 1) com Z e X; Bob decodifica com CNOT + H.

use crate::error::{AlgorithmError, AlgorithmResult};
use qsim_core::{ALL, QState, RandomSource};

const ALICE: usize = 1;
const BOB: usize = 0;

/// Envia `message` (duas letras `0`/`1`) e devolve o que Bob decodificou
pub fn super_dense<R>(message: &str, random: &mut R) -> AlgorithmResult<String>
where
    R: RandomSource + ?Sized,
{
    let bytes = message.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| *b == b'0' || *b == b'1') {
        return Err(AlgorithmError::InvalidInput(format!(
            "super dense coding sends exactly two bits (got {message:?})"
        )));
    }

    let mut state = QState::from_bit_string("|00>")?
        .add(&QState::from_bit_string("|11>")?)?
        .normalize();
    tracing::debug!(%state, "initial bell state");

    if bytes[0] == b'1' {
        state = state.z(ALICE)?;
    }
    if bytes[1] == b'1' {
        state = state.x(ALICE)?;
    }
    tracing::debug!(%state, "alice prepared her qubit");

    let state = state.cnot(ALICE, BOB)?.hadamard(ALICE)?;
    tracing::debug!(%state, "bob decoded");

    Ok(state.measure_with(ALL, random)?.as_bit_string())
}
