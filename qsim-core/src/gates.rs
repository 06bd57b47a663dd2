//! # Quantum Gates — Portas de um qubit
//!
//! Cada porta é uma matriz 2x2 unitária que age sobre o par
//! `(amplitude de |0⟩, amplitude de |1⟩)` de um qubit. O motor de aplicação
//! controlada em [`crate::engine`] usa essas matrizes como kernel.
//!
//! ## Gates Implementadas
//!
//! - **Pauli**: X, Y, Z
//! - **Fase**: S, T, P(φ)
//! - **Superposição**: H (Hadamard)
//! - **Rotação**: Rx, Ry, Rz

use crate::complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

const UNITARY_TOLERANCE: f64 = 1e-10;

/// Matriz 2x2 complexa
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self {
            elements: [[a, b], [c, d]],
        }
    }

    /// Matriz diagonal `diag(d0, d1)`
    pub const fn diagonal(d0: Complex, d1: Complex) -> Self {
        Self::new(d0, Complex::ZERO, Complex::ZERO, d1)
    }

    pub const fn identity() -> Self {
        Self::diagonal(Complex::ONE, Complex::ONE)
    }

    /// Aplica ao par `[a0, a1]`
    pub fn apply(&self, pair: [Complex; 2]) -> [Complex; 2] {
        let [a0, a1] = pair;
        let [[a, b], [c, d]] = self.elements;

        [
            a.multiply(a0).add(b.multiply(a1)),
            c.multiply(a0).add(d.multiply(a1)),
        ]
    }

    /// Produto `self · other`
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2::new(
            a.multiply(e).add(b.multiply(g)),
            a.multiply(f).add(b.multiply(h)),
            c.multiply(e).add(d.multiply(g)),
            c.multiply(f).add(d.multiply(h)),
        )
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2::new(a.conjugate(), c.conjugate(), b.conjugate(), d.conjugate())
    }

    /// Igualdade elemento a elemento dentro de `tolerance`
    pub fn approx_eq(&self, other: &Matrix2x2, tolerance: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(x, y)| x.subtract(*y).magnitude() < tolerance)
    }

    /// U·U† = I
    pub fn is_unitary(&self) -> bool {
        self.mul(&self.dagger())
            .approx_eq(&Matrix2x2::identity(), UNITARY_TOLERANCE)
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Porta de um qubit
pub trait QuantumGate {
    /// Nome curto da porta
    fn name(&self) -> &'static str;

    fn matrix(&self) -> Matrix2x2;

    fn is_unitary(&self) -> bool {
        self.matrix().is_unitary()
    }

    /// Aplica ao par de amplitudes de um qubit
    fn apply(&self, pair: [Complex; 2]) -> [Complex; 2] {
        self.matrix().apply(pair)
    }
}

impl QuantumGate for Matrix2x2 {
    fn name(&self) -> &'static str {
        "U"
    }

    fn matrix(&self) -> Matrix2x2 {
        *self
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Hadamard: ((a0+a1)/√2, (a0−a1)/√2)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = Complex::SQRT1_2;
        Matrix2x2::new(h, h, h, h.negate())
    }

    fn apply(&self, [a0, a1]: [Complex; 2]) -> [Complex; 2] {
        [
            a0.add(a1).multiply(Complex::SQRT1_2),
            a0.subtract(a1).multiply(Complex::SQRT1_2),
        ]
    }
}

/// Pauli-X (NOT): troca as amplitudes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new(Complex::ZERO, Complex::ONE, Complex::ONE, Complex::ZERO)
    }
}

/// Pauli-Y: (−i·a1, i·a0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::new(Complex::ZERO, Complex::I.negate(), Complex::I, Complex::ZERO)
    }
}

/// Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::real(-1.0))
    }
}

/// S (√Z)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::I)
    }
}

/// e^(iπ/4)
const T_PHASE: Complex = Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

/// T (π/8)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, T_PHASE)
    }

    fn apply(&self, [a0, a1]: [Complex; 2]) -> [Complex; 2] {
        [a0, a1.multiply(T_PHASE)]
    }
}

/// Deslocamento de fase R(φ): multiplica |1⟩ por e^(iφ)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "R"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::diagonal(Complex::ONE, Complex::from_polar(self.phi))
    }
}

/// Rotação em X por theta
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> Matrix2x2 {
        let cos = Complex::real((self.theta / 2.0).cos());
        let negative_i_sin = Complex::new(0.0, -(self.theta / 2.0).sin());
        Matrix2x2::new(cos, negative_i_sin, negative_i_sin, cos)
    }
}

/// Rotação em Y por theta
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> Matrix2x2 {
        let cos = Complex::real((self.theta / 2.0).cos());
        let sin = Complex::real((self.theta / 2.0).sin());
        Matrix2x2::new(cos, sin.negate(), sin, cos)
    }
}

/// Rotação em Z por theta
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> Matrix2x2 {
        let half = self.theta / 2.0;
        Matrix2x2::diagonal(Complex::from_polar(-half), Complex::from_polar(half))
    }
}
