//! Tipos de erro para qsim-core

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer em operações sobre registradores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    /// Número de argumentos incompatível com a operação
    #[error("{0}")]
    Arity(&'static str),

    /// Qualificador de bits malformado
    #[error("{0}")]
    BitQualifier(String),

    #[error("bit range must have 'from' being less than or equal to 'to'")]
    InvalidRange { from: usize, to: usize },

    #[error("bit {bit} is outside of a {num_bits}-bit register")]
    BitOutOfRange { bit: usize, num_bits: usize },

    /// Bits de controle e alvo se sobrepõem
    #[error("control and target bits must not be the same nor overlap")]
    Overlap,

    #[error("invalid bit string: {0:?}")]
    InvalidBitString(String),

    #[error("cannot combine a {left}-bit state with a {right}-bit state")]
    WidthMismatch { left: usize, right: usize },

    #[error("register of {0} bits exceeds the 64-bit limit")]
    TooManyBits(usize),

    #[error("basis index {index} does not fit in a {num_bits}-bit register")]
    IndexOutOfRange { index: u64, num_bits: usize },

    #[error("cannot measure a state with no non-zero amplitudes")]
    EmptyState,
}
