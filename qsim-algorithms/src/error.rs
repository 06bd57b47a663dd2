//! Tipos de erro para qsim-algorithms

use qsim_core::QuantumError;
use thiserror::Error;

/// Resultado customizado para os algoritmos
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    /// Entrada fora do domínio do algoritmo
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Algoritmo probabilístico esgotou as tentativas
    #[error("gave up after {attempts} attempts")]
    GaveUp { attempts: u32 },
}
