//! # Fatoração de Shor
//!
//! A parte quântica ([`determine_frequency`]) estima a frequência de
//! `f(x) = a^x mod n` com a QFT; frações contínuas convertem a amostra em um
//! candidato a período. O restante é aritmética clássica.
//!
//! **Complexidade:** o registrador tem `3·⌈log2 n⌉` bits e a QFT atua sobre
//! `2·⌈log2 n⌉` deles, então só valores pequenos de `n` são práticos.

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::math::{continued_fraction, gcd, lcm, power_factor, power_mod};
use qsim_core::{BitRange, QState, RandomSource};

/// Tentativas de escolher uma base `a` antes de desistir
pub const MAX_FACTOR_ATTEMPTS: u32 = 8;

/// Registradores usados na busca de período de `a^x mod n`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodRegisters {
    /// Bits de saída `0..num_out_bits`
    pub output: BitRange,
    /// Bits de entrada, logo acima da saída, com o dobro da largura
    pub input: BitRange,
}

impl PeriodRegisters {
    pub fn new(num_out_bits: usize) -> AlgorithmResult<Self> {
        if num_out_bits == 0 || 3 * num_out_bits > qsim_core::MAX_BITS {
            return Err(AlgorithmError::InvalidInput(format!(
                "period finding with {num_out_bits} output bits does not fit a register"
            )));
        }
        let num_in_bits = 2 * num_out_bits;
        Ok(Self {
            output: BitRange::new(0, num_out_bits - 1)?,
            input: BitRange::new(num_out_bits, num_out_bits + num_in_bits - 1)?,
        })
    }

    pub fn num_bits(&self) -> usize {
        self.input.to + 1
    }
}

/// Bits necessários para representar valores menores que `n`
pub fn output_bits(n: u64) -> usize {
    (64 - n.saturating_sub(1).leading_zeros()) as usize
}

/// Amostra da frequência de `f` (ou de um múltiplo dela) sobre `2^|input|`
pub fn determine_frequency<F, R>(
    registers: PeriodRegisters,
    f: F,
    random: &mut R,
) -> AlgorithmResult<u64>
where
    F: Fn(u64) -> u64,
    R: RandomSource + ?Sized,
{
    let input = registers.input;
    let output = registers.output;

    let state = QState::new(registers.num_bits())?
        .hadamard(input)?
        .apply_function(input, output, f)?;
    // medir a saída não altera a distribuição da entrada e reduz o estado
    let state = state.measure_with(output, random)?.new_state;
    let sample = state.qft(input)?.measure_with(input, random)?.result;
    Ok(sample)
}

/// Ordem de `a` módulo `n`: menor `r > 0` com `a^r ≡ 1 (mod n)`
pub fn compute_order<R>(a: u64, n: u64, num_out_bits: usize, random: &mut R) -> AlgorithmResult<u64>
where
    R: RandomSource + ?Sized,
{
    let registers = PeriodRegisters::new(num_out_bits)?;
    let input_range = (1u64 << registers.input.width()) as f64;
    let output_range = 1u64 << num_out_bits;
    let accuracy = 1.0 / (2.0 * (output_range as f64).powi(2));
    let max_attempts = 2 * num_out_bits as u32;

    let f = |x: u64| power_mod(a, x, n);
    let f0 = f(0);
    let mut best_so_far = 1u64;

    tracing::debug!(a, n, "computing the period of a^x mod n");
    for attempt in 0..=max_attempts {
        if f(best_so_far) == f0 {
            tracing::debug!(a, n, period = best_so_far, "period found");
            return Ok(best_so_far);
        }
        if attempt == max_attempts {
            break;
        }

        let sample = determine_frequency(registers, f, random)?;
        let candidate =
            continued_fraction(sample as f64 / input_range, accuracy).denominator as u64;
        tracing::trace!(sample, candidate, "candidate period from qft");

        if candidate <= 1 || candidate > output_range {
            tracing::trace!(candidate, "ignoring candidate out of range");
        } else if f(candidate) == f0 {
            best_so_far = candidate;
        } else {
            let combined = lcm(candidate, best_so_far);
            if combined > output_range {
                tracing::trace!(combined, "ignoring candidate, lcm too large");
            } else {
                best_so_far = combined;
            }
        }
    }

    tracing::debug!(a, n, "giving up on the period");
    Err(AlgorithmError::GaveUp {
        attempts: max_attempts,
    })
}

/// Devolve um fator não trivial de `n`
pub fn factor<R>(n: u64, random: &mut R) -> AlgorithmResult<u64>
where
    R: RandomSource + ?Sized,
{
    if n < 4 {
        return Err(AlgorithmError::InvalidInput(format!(
            "{n} has no non-trivial factors"
        )));
    }
    if n % 2 == 0 {
        tracing::debug!(n, "even, no quantum computation needed");
        return Ok(2);
    }
    let root = power_factor(n);
    if root > 1 {
        tracing::debug!(n, root, "perfect power, no quantum computation needed");
        return Ok(root);
    }

    let num_out_bits = output_bits(n);
    PeriodRegisters::new(num_out_bits)?;

    for attempt in 1..=MAX_FACTOR_ATTEMPTS {
        let choice = 2 + ((random.next_f64() * (n - 2) as f64) as u64).min(n - 3);
        let common = gcd(choice, n);
        if common > 1 {
            tracing::debug!(n, choice, common, "lucky guess shares a factor");
            return Ok(common);
        }

        match compute_order(choice, n, num_out_bits, random) {
            Ok(period) if period % 2 == 0 => {
                let half_power = power_mod(choice, period / 2, n);
                let candidate = gcd((half_power + n - 1) % n, n);
                if candidate > 1 && candidate < n && n % candidate == 0 {
                    tracing::debug!(n, choice, period, candidate, "factor from period");
                    return Ok(candidate);
                }
                tracing::debug!(candidate, "not a real factor");
            }
            Ok(period) => tracing::debug!(period, "period is odd"),
            Err(AlgorithmError::GaveUp { .. }) => {}
            Err(err) => return Err(err),
        }
        tracing::debug!(attempt, "trying again");
    }

    Err(AlgorithmError::GaveUp {
        attempts: MAX_FACTOR_ATTEMPTS,
    })
}
