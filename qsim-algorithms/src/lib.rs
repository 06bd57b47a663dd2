//! # qsim-algorithms — Algoritmos Quânticos de Livro-Texto
//!
//! Circuitos clássicos de demonstração montados somente com a API pública
//! de `qsim-core`:
//!
//! - [`deutsch`] / [`deutsch_jozsa`]: uma consulta decide paridade/balanceamento
//! - [`bernstein_vazirani`]: recupera a string oculta de `f(x) = x·u`
//! - [`super_dense`]: dois bits clássicos em um qubit emaranhado
//! - [`grover::search`]: busca não estruturada em O(√N)
//! - [`shor::factor`]: fatoração via busca de período com QFT
//!
//! Toda medição recebe um [`qsim_core::RandomSource`] explícito, então uma
//! semente fixa reproduz a execução inteira.
//!
//! ## Exemplo
//!
//! ```ignore
//! use qsim_algorithms::{shor, hidden_string_function, bernstein_vazirani};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let f = hidden_string_function("01101")?;
//! assert_eq!(bernstein_vazirani(f, 5, &mut rng)?, "01101");
//!
//! let factor = shor::factor(35, &mut rng)?;
//! assert!(factor == 5 || factor == 7);
//! ```

pub mod bernstein_vazirani;
pub mod deutsch;
pub mod error;
pub mod grover;
pub mod math;
pub mod shor;
pub mod super_dense;

pub use bernstein_vazirani::{bernstein_vazirani, hidden_string_function};
pub use deutsch::{Verdict, deutsch, deutsch_jozsa, minus_state};
pub use error::{AlgorithmError, AlgorithmResult};
pub use math::{ContinuedFraction, continued_fraction, gcd, lcm, power_factor, power_mod};
pub use super_dense::super_dense;
