//! # ⚛️ qsim-core — Registradores Quânticos Esparsos
//!
//! Simula registradores de poucos qubits em um computador clássico. Uma
//! superposição é um mapa esparso de índices da base computacional para
//! amplitudes complexas; portas, oráculos, medição e QFT leem esse mapa e
//! devolvem um novo `QState`.
//!
//! ## Computational Complexity
//!
//! **Porta de um qubit — O(k × S):**
//! - k = bits alvo, S = estados populados
//! - Cada estado é visitado uma vez por bit alvo (pares que diferem no alvo)
//!
//! **Oráculo clássico — O(S):** um XOR por estado populado
//!
//! **Medição — O(S):** soma cumulativa + filtro
//!
//! **QFT — O(k² × S):** k Hadamards e k(k−1)/2 rotações controladas
//!
//! **Scalability:**
//! - Memória proporcional a S, não a 2^n
//! - Registradores de até 64 bits (índices `u64`)
//! - Hadamard em todos os bits popula 2^n estados: use com n pequeno
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    QState                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  BTreeMap<u64, Complex> (poda < 1e-10)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  controlled_apply ← gates (Matrix2x2)     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌──────────────┐ ┌────────────┐ ┌───────────┐  │
//! │  │apply_function│ │  measure   │ │    qft    │  │
//! │  └──────────────┘ └────────────┘ └───────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use qsim_core::{QState, ALL};
//!
//! let bell = QState::from_bit_string("|00>")?
//!     .hadamard(0)?
//!     .cnot(0, 1)?;
//! println!("{bell}"); // 0.7071 |00> + 0.7071 |11>
//!
//! let measurement = bell.measure(ALL)?;
//! assert!(measurement.result == 0 || measurement.result == 3);
//! ```

pub mod amplitude;
pub mod bits;
pub mod complex;
pub mod engine;
pub mod error;
pub mod gates;
pub mod measure;
pub mod oracle;
pub mod qft;
pub mod random;
pub mod state;

pub use amplitude::{AmplitudeState, Measurement};
pub use bits::{
    ALL, BitQualifier, BitRange, MAX_BITS, build_mask, low_mask, pad_bits, parse_bit_string,
    resolve_to_array, resolve_to_range, validate_disjoint,
};
pub use complex::{Complex, FormatOptions};
pub use error::{QuantumError, QuantumResult};
pub use gates::{
    Hadamard, Matrix2x2, PauliX, PauliY, PauliZ, Phase, QuantumGate, RotationX, RotationY,
    RotationZ, SGate, TGate,
};
pub use random::{FixedRandom, RandomSource, SequenceRandom};
pub use state::{DISPLAY_DECIMAL_PLACES, QState, ROUNDING_EPSILON};
