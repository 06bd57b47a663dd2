//! Aplicação de oráculos clássicos: |x⟩|y⟩ → |x⟩|y ⊕ f(x)⟩

use crate::bits::{BitQualifier, low_mask, resolve_to_range};
use crate::error::{QuantumError, QuantumResult};
use crate::state::{AmplitudeMap, QState, sparse_assign};
use std::collections::HashSet;

impl QState {
    /// Calcula `f` sobre os bits `input` e faz XOR do resultado nos bits `target`
    ///
    /// Os dois qualificadores precisam ser intervalos contíguos e disjuntos.
    /// Bits de `f(x)` além da largura de `target` são descartados.
    pub fn apply_function<F>(
        &self,
        input: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        f: F,
    ) -> QuantumResult<QState>
    where
        F: Fn(u64) -> u64,
    {
        let input = resolve_to_range(&input.into(), self.num_bits())?;
        let target = resolve_to_range(&target.into(), self.num_bits())?;
        if input.overlaps(&target) {
            return Err(QuantumError::Overlap);
        }

        let high_mask = low_mask(input.to + 1);
        let target_mask = target.mask();
        let mut skip = HashSet::new();
        let mut amplitudes = AmplitudeMap::new();

        for (&index, &amplitude) in self.amplitudes() {
            if skip.contains(&index) {
                continue;
            }
            let argument = (index & high_mask) >> input.from;
            let delta = (f(argument) << target.from) & target_mask;
            let flipped = index ^ delta;
            if flipped == index {
                sparse_assign(&mut amplitudes, index, amplitude);
            } else {
                skip.insert(flipped);
                sparse_assign(&mut amplitudes, index, self.amplitude(flipped));
                sparse_assign(&mut amplitudes, flipped, amplitude);
            }
        }

        tracing::trace!(?input, ?target, populated = amplitudes.len(), "apply function");
        Ok(QState::from_parts(self.num_bits(), amplitudes))
    }
}
