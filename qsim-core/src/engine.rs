//! # Motor de operadores controlados
//!
//! Toda porta nomeada é um operador 2×2 aplicado por [`QState::controlled_apply`]:
//! para cada bit alvo, os estados da base são agrupados em pares que diferem
//! apenas nesse bit, e o operador recebe `(amplitude de |0⟩, amplitude de |1⟩)`
//! do par sempre que todos os bits de controle estão ligados.
//!
//! Alvos com vários bits aplicam o operador bit a bit, em ordem.

use crate::bits::{BitQualifier, build_mask, resolve_to_array, validate_disjoint};
use crate::complex::Complex;
use crate::error::{QuantumError, QuantumResult};
use crate::gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
use crate::state::{AmplitudeMap, QState, sparse_assign};
use std::collections::HashSet;

impl QState {
    /// Aplica `op` aos bits `target` quando todos os bits de `control` estão ligados
    ///
    /// `control = None` aplica incondicionalmente.
    pub fn controlled_apply<F>(
        &self,
        control: Option<BitQualifier>,
        target: impl Into<BitQualifier>,
        mut op: F,
    ) -> QuantumResult<QState>
    where
        F: FnMut([Complex; 2]) -> [Complex; 2],
    {
        let target_bits = resolve_to_array(&target.into(), self.num_bits())?;
        let control_bits = match control {
            Some(control) => Some(resolve_to_array(&control, self.num_bits())?),
            None => None,
        };
        if let Some(control_bits) = &control_bits {
            validate_disjoint(control_bits, &target_bits)?;
        }
        let control_mask = build_mask(control_bits.as_deref());

        tracing::trace!(?control_bits, ?target_bits, "controlled apply");

        let mut state = self.clone();
        for target_bit in target_bits {
            state = state.apply_to_bit(control_mask, target_bit, &mut op);
        }
        Ok(state)
    }

    fn apply_to_bit<F>(&self, control_mask: Option<u64>, target_bit: usize, op: &mut F) -> QState
    where
        F: FnMut([Complex; 2]) -> [Complex; 2],
    {
        let target_mask = 1u64 << target_bit;
        let mut visited = HashSet::new();
        let mut amplitudes = AmplitudeMap::new();

        for &index in self.amplitudes().keys() {
            if visited.contains(&index) {
                continue;
            }
            visited.insert(index ^ target_mask);

            let index0 = index & !target_mask;
            let index1 = index | target_mask;
            let pair = [self.amplitude(index0), self.amplitude(index1)];

            let [amplitude0, amplitude1] = match control_mask {
                Some(mask) if index & mask != mask => pair,
                _ => op(pair),
            };
            sparse_assign(&mut amplitudes, index0, amplitude0);
            sparse_assign(&mut amplitudes, index1, amplitude1);
        }

        QState::from_parts(self.num_bits(), amplitudes)
    }

    /// Aplica uma porta nomeada (ou qualquer [`QuantumGate`])
    pub fn apply_gate<G>(
        &self,
        control: Option<BitQualifier>,
        target: impl Into<BitQualifier>,
        gate: &G,
    ) -> QuantumResult<QState>
    where
        G: QuantumGate + ?Sized,
    {
        tracing::trace!(gate = gate.name(), "apply gate");
        self.controlled_apply(control, target, |pair| gate.apply(pair))
    }

    /// Aplica uma matriz 2×2 arbitrária
    pub fn apply_matrix(
        &self,
        control: Option<BitQualifier>,
        target: impl Into<BitQualifier>,
        matrix: Matrix2x2,
    ) -> QuantumResult<QState> {
        self.controlled_apply(control, target, |pair| matrix.apply(pair))
    }

    fn controlled_gate<G: QuantumGate>(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        gate: G,
    ) -> QuantumResult<QState> {
        self.apply_gate(Some(control.into()), target, &gate)
    }

    // =========================================================================
    // Portas incondicionais
    // =========================================================================

    pub fn x(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &PauliX)
    }

    /// Alias de [`QState::x`]
    pub fn not(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.x(target)
    }

    pub fn y(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &PauliY)
    }

    pub fn z(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &PauliZ)
    }

    pub fn s(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &SGate)
    }

    pub fn t(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &TGate)
    }

    pub fn hadamard(&self, target: impl Into<BitQualifier>) -> QuantumResult<QState> {
        self.apply_gate(None, target, &Hadamard)
    }

    /// Deslocamento de fase: |1⟩ ganha e^(i·angle)
    pub fn r(&self, target: impl Into<BitQualifier>, angle: f64) -> QuantumResult<QState> {
        self.apply_gate(None, target, &Phase::new(angle))
    }

    pub fn rotate_x(&self, target: impl Into<BitQualifier>, angle: f64) -> QuantumResult<QState> {
        self.apply_gate(None, target, &RotationX::new(angle))
    }

    pub fn rotate_y(&self, target: impl Into<BitQualifier>, angle: f64) -> QuantumResult<QState> {
        self.apply_gate(None, target, &RotationY::new(angle))
    }

    pub fn rotate_z(&self, target: impl Into<BitQualifier>, angle: f64) -> QuantumResult<QState> {
        self.apply_gate(None, target, &RotationZ::new(angle))
    }

    // =========================================================================
    // Portas controladas
    // =========================================================================

    pub fn controlled_x(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, PauliX)
    }

    /// Alias de [`QState::controlled_x`]
    pub fn cnot(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_x(control, target)
    }

    pub fn controlled_y(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, PauliY)
    }

    pub fn controlled_z(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, PauliZ)
    }

    pub fn controlled_s(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, SGate)
    }

    pub fn controlled_t(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, TGate)
    }

    pub fn controlled_hadamard(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, Hadamard)
    }

    pub fn controlled_r(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        angle: f64,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, Phase::new(angle))
    }

    pub fn controlled_x_rotation(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        angle: f64,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, RotationX::new(angle))
    }

    pub fn controlled_y_rotation(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        angle: f64,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, RotationY::new(angle))
    }

    pub fn controlled_z_rotation(
        &self,
        control: impl Into<BitQualifier>,
        target: impl Into<BitQualifier>,
        angle: f64,
    ) -> QuantumResult<QState> {
        self.controlled_gate(control, target, RotationZ::new(angle))
    }

    /// Toffoli: `bits` são os controles seguidos do alvo
    pub fn toffoli(&self, bits: &[usize]) -> QuantumResult<QState> {
        let Some((&target, controls)) = bits.split_last() else {
            return Err(QuantumError::Arity("toffoli requires at least two bits"));
        };
        if controls.is_empty() {
            return Err(QuantumError::Arity("toffoli requires at least two bits"));
        }
        self.controlled_x(controls, target)
    }

    // =========================================================================
    // Swap
    // =========================================================================

    /// Troca os valores dos bits `bit1` e `bit2` em todo estado da base
    pub fn swap(&self, bit1: usize, bit2: usize) -> QuantumResult<QState> {
        self.swap_where(None, bit1, bit2)
    }

    /// Swap condicionado a `control`
    pub fn controlled_swap(
        &self,
        control: impl Into<BitQualifier>,
        bit1: usize,
        bit2: usize,
    ) -> QuantumResult<QState> {
        let control_bits = resolve_to_array(&control.into(), self.num_bits())?;
        validate_disjoint(&control_bits, &[bit1, bit2])?;
        self.swap_where(build_mask(Some(control_bits.as_slice())), bit1, bit2)
    }

    fn swap_where(
        &self,
        control_mask: Option<u64>,
        bit1: usize,
        bit2: usize,
    ) -> QuantumResult<QState> {
        resolve_to_array(&BitQualifier::Bits(vec![bit1, bit2]), self.num_bits())?;

        let flip = (1u64 << bit1) | (1u64 << bit2);
        let mut amplitudes = AmplitudeMap::new();
        for (&index, &amplitude) in self.amplitudes() {
            let condition = control_mask.is_none_or(|mask| index & mask == mask);
            let differs = ((index >> bit1) & 1) != ((index >> bit2) & 1);
            let new_index = if condition && differs { index ^ flip } else { index };
            sparse_assign(&mut amplitudes, new_index, amplitude);
        }
        Ok(QState::from_parts(self.num_bits(), amplitudes))
    }
}
