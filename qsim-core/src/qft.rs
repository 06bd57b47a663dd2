//! # Transformada de Fourier Quântica
//!
//! Forma recursiva: a QFT de `[b0, b1..bk]` é a QFT de `[b1..bk]`, seguida de
//! rotações de fase em `b0` controladas por cada `bi` (ângulo 2π/2^(i+1)) e
//! de um Hadamard em `b0`. Ao final a ordem dos bits é invertida.
//!
//! **Complexidade — O(k² × S):** k bits alvo, S estados populados por porta.

use crate::bits::{BitQualifier, resolve_to_array};
use crate::error::QuantumResult;
use crate::state::QState;
use std::f64::consts::TAU;

impl QState {
    /// QFT sobre os bits `target` (sem variante controlada)
    pub fn qft(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        let bits = resolve_to_array(&target.into(), self.num_bits())?;
        tracing::debug!(bits = bits.len(), populated = self.populated(), "qft");
        if bits.is_empty() {
            return Ok(self.clone());
        }

        let transformed = qft_recursive(self, &bits)?;
        transformed.reverse_bits(&bits)
    }

    /// Inverte a ordem dos bits listados: troca primeiro e último até o meio
    pub fn reverse_bits(&self, bits: &[usize]) -> QuantumResult<QState> {
        let mut state = self.clone();
        let mut remaining = bits;
        while let [first, middle @ .., last] = remaining {
            state = state.swap(*first, *last)?;
            remaining = middle;
        }
        Ok(state)
    }
}

fn qft_recursive(state: &QState, bits: &[usize]) -> QuantumResult<QState> {
    let Some((&first, rest)) = bits.split_first() else {
        return Ok(state.clone());
    };

    let mut state = if rest.is_empty() {
        state.clone()
    } else {
        qft_recursive(state, rest)?
    };
    for (offset, &other) in rest.iter().enumerate() {
        state = state.controlled_r(first, other, phase_angle(offset))?;
    }
    state.hadamard(first)
}

/// 2π/2^(offset+2); finito para qualquer distância entre bits
fn phase_angle(offset: usize) -> f64 {
    TAU / ((offset + 2) as f64).exp2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::ALL;

    fn basis(bits: &str) -> QState {
        QState::from_bit_string(bits).unwrap()
    }

    fn even_superposition(a: &str, b: &str) -> QState {
        basis(a).add(&basis(b)).unwrap().normalize()
    }

    #[test]
    fn test_single_bit_is_hadamard() {
        let state = even_superposition("|0>", "|1>").qft([0]).unwrap();
        assert_eq!(state.to_string(), "|0>");
    }

    #[test]
    fn test_all_zeros() {
        let state = basis("|00>").qft([0, 1]).unwrap();
        assert_eq!(state.to_string(), "0.5 |00> + 0.5 |01> + 0.5 |10> + 0.5 |11>");
    }

    #[test]
    fn test_inverts_uniform_superposition() {
        let state = basis("|0000>").hadamard(ALL).unwrap().qft(ALL).unwrap();
        assert_eq!(state.to_string(), "|0000>");
    }

    #[test]
    fn test_two_bit_basis_state() {
        let state = basis("|01>").qft(ALL).unwrap();
        assert_eq!(state.to_string(), "0.5 |00> + 0.5i |01> - 0.5 |10> - 0.5i |11>");
    }

    #[test]
    fn test_three_bit_basis_states() {
        assert_eq!(
            basis("|001>").qft(ALL).unwrap().to_string(),
            "0.3536 |000> + 0.25+0.25i |001> + 0.3536i |010> - 0.25-0.25i |011> \
             - 0.3536 |100> - 0.25+0.25i |101> - 0.3536i |110> + 0.25-0.25i |111>"
        );
        assert_eq!(
            basis("|010>").qft(ALL).unwrap().to_string(),
            "0.3536 |000> + 0.3536i |001> - 0.3536 |010> - 0.3536i |011> \
             + 0.3536 |100> + 0.3536i |101> - 0.3536 |110> - 0.3536i |111>"
        );
    }

    #[test]
    fn test_periodic_states() {
        let state = even_superposition("|000>", "|100>").qft([0, 1, 2]).unwrap();
        assert_eq!(state.to_string(), "0.5 |000> + 0.5 |010> + 0.5 |100> + 0.5 |110>");

        let state = even_superposition("|001>", "|101>").qft([0, 1, 2]).unwrap();
        assert_eq!(state.to_string(), "0.5 |000> + 0.5i |010> - 0.5 |100> - 0.5i |110>");
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(basis("0011").reverse_bits(&[0, 1, 2, 3]).unwrap(), basis("1100"));
        assert_eq!(basis("0001").reverse_bits(&[0, 1, 2]).unwrap(), basis("0100"));
        assert_eq!(basis("0001").reverse_bits(&[0]).unwrap(), basis("0001"));
    }

    #[test]
    fn test_phase_angle_for_wide_ranges() {
        assert_eq!(phase_angle(0), TAU / 4.0);
        assert_eq!(phase_angle(1), TAU / 8.0);
        assert_eq!(phase_angle(62), TAU / 2f64.powi(64));
        assert!(phase_angle(200) > 0.0);
    }
}
