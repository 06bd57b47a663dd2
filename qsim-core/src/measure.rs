//! # Medição
//!
//! Sorteia um estado da base com probabilidade |amplitude|², colapsa os bits
//! medidos para os valores desse estado e renormaliza o que sobrou.
//!
//! **Complexidade — O(S):** uma passada para escolher o estado (soma
//! cumulativa em ordem crescente de índice) e outra para filtrar.

use crate::amplitude::Measurement;
use crate::bits::{BitQualifier, build_mask, resolve_to_array};
use crate::error::{QuantumError, QuantumResult};
use crate::random::RandomSource;
use crate::state::{AmplitudeMap, QState};

impl QState {
    /// Mede `bits` usando o gerador da thread atual
    pub fn measure(&self, bits: impl Into<BitQualifier>) -> QuantumResult<Measurement> {
        let mut rng = rand::thread_rng();
        self.measure_with(bits, &mut rng)
    }

    /// Mede `bits` com uma fonte de aleatoriedade explícita
    pub fn measure_with<R>(
        &self,
        bits: impl Into<BitQualifier>,
        random: &mut R,
    ) -> QuantumResult<Measurement>
    where
        R: RandomSource + ?Sized,
    {
        let bits = resolve_to_array(&bits.into(), self.num_bits())?;
        let mask = build_mask(Some(bits.as_slice())).unwrap_or(0);
        let chosen = self.choose_basis_state(random.next_f64())?;

        let mut amplitudes = AmplitudeMap::new();
        for (&index, &amplitude) in self.amplitudes() {
            if index & mask == chosen & mask {
                amplitudes.insert(index, amplitude);
            }
        }

        let mut result = 0u64;
        for bit in (0..self.num_bits()).rev() {
            if bits.contains(&bit) {
                result = (result << 1) | ((chosen >> bit) & 1);
            }
        }

        tracing::debug!(?bits, chosen, result, "measured");
        let new_state = QState::from_parts(self.num_bits(), amplitudes).normalize();
        Ok(Measurement::new(bits.len(), result, new_state))
    }

    /// Primeiro estado cuja probabilidade acumulada ultrapassa `r`
    /// (o último, se nenhum ultrapassar)
    fn choose_basis_state(&self, r: f64) -> QuantumResult<u64> {
        let mut cumulative = 0.0;
        let mut last = None;
        for (&index, amplitude) in self.amplitudes() {
            cumulative += amplitude.norm_sqr();
            if cumulative > r {
                return Ok(index);
            }
            last = Some(index);
        }
        last.ok_or(QuantumError::EmptyState)
    }
}
