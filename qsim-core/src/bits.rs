//! # Bit Qualifiers — "quais bits"
//!
//! Normaliza os argumentos que selecionam bits (um índice, uma lista, um
//! intervalo inclusivo ou todos os bits) para listas ordenadas ou intervalos,
//! monta máscaras e valida que controle e alvo são disjuntos.
//!
//! Bit 0 é o menos significativo do índice da base.

use crate::error::{QuantumError, QuantumResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Maior registrador suportado (índices da base são `u64`)
pub const MAX_BITS: usize = 64;

/// Seleção de bits de um registrador
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitQualifier {
    /// Um único bit
    Bit(usize),
    /// Lista explícita, na ordem de aplicação
    Bits(Vec<usize>),
    /// Intervalo inclusivo `from..=to`
    Range { from: usize, to: usize },
    /// Todos os bits do registrador
    All,
}

/// Atalho para [`BitQualifier::All`]
pub const ALL: BitQualifier = BitQualifier::All;

/// Intervalo inclusivo de bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitRange {
    pub from: usize,
    pub to: usize,
}

impl BitRange {
    pub fn new(from: usize, to: usize) -> QuantumResult<Self> {
        if from > to {
            return Err(QuantumError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Quantidade de bits no intervalo
    pub fn width(&self) -> usize {
        self.to - self.from + 1
    }

    /// Máscara com os bits do intervalo ligados
    pub fn mask(&self) -> u64 {
        low_mask(self.width()) << self.from
    }

    pub fn overlaps(&self, other: &BitRange) -> bool {
        self.to >= other.from && other.to >= self.from
    }

    pub fn to_vec(&self) -> Vec<usize> {
        (self.from..=self.to).collect()
    }
}

impl From<usize> for BitQualifier {
    fn from(bit: usize) -> Self {
        Self::Bit(bit)
    }
}

impl From<Vec<usize>> for BitQualifier {
    fn from(bits: Vec<usize>) -> Self {
        Self::Bits(bits)
    }
}

impl From<&[usize]> for BitQualifier {
    fn from(bits: &[usize]) -> Self {
        Self::Bits(bits.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for BitQualifier {
    fn from(bits: [usize; N]) -> Self {
        Self::Bits(bits.to_vec())
    }
}

impl From<RangeInclusive<usize>> for BitQualifier {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Range {
            from: *range.start(),
            to: *range.end(),
        }
    }
}

impl From<BitRange> for BitQualifier {
    fn from(range: BitRange) -> Self {
        Self::Range {
            from: range.from,
            to: range.to,
        }
    }
}

impl fmt::Display for BitQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bit(bit) => write!(f, "{bit}"),
            Self::Bits(bits) => {
                let listed: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
                write!(f, "{}", listed.join(","))
            }
            Self::Range { from, to } => write!(f, "{from}..{to}"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Aceita `all`, `3`, `0,2,5`, `1..3` e `1..=3` (intervalos sempre inclusivos)
impl FromStr for BitQualifier {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        if let Some((from, to)) = s.split_once("..") {
            let to = to.strip_prefix('=').unwrap_or(to);
            let from = parse_index(from)?;
            let to = parse_index(to)?;
            BitRange::new(from, to)?;
            return Ok(Self::Range { from, to });
        }

        if s.contains(',') {
            let bits = s
                .split(',')
                .map(parse_index)
                .collect::<QuantumResult<Vec<_>>>()?;
            return Ok(Self::Bits(bits));
        }

        parse_index(s).map(Self::Bit)
    }
}

fn parse_index(s: &str) -> QuantumResult<usize> {
    s.trim().parse().map_err(|_| {
        QuantumError::BitQualifier(format!(
            "bit qualification must be either: a number, a list of numbers, all, \
             or from..to (got {s:?})"
        ))
    })
}

fn check_bit(bit: usize, num_bits: usize) -> QuantumResult<usize> {
    if bit >= num_bits {
        return Err(QuantumError::BitOutOfRange { bit, num_bits });
    }
    Ok(bit)
}

fn all_bits(num_bits: usize) -> QuantumResult<BitRange> {
    if num_bits == 0 {
        return Err(QuantumError::BitQualifier(
            "a 0-bit register has no bits to select".to_string(),
        ));
    }
    Ok(BitRange {
        from: 0,
        to: num_bits - 1,
    })
}

/// Resolve o qualificador para uma lista ordenada de índices
pub fn resolve_to_array(bits: &BitQualifier, num_bits: usize) -> QuantumResult<Vec<usize>> {
    let resolved = match bits {
        BitQualifier::Bit(bit) => vec![*bit],
        BitQualifier::Bits(list) => list.clone(),
        BitQualifier::Range { from, to } => BitRange::new(*from, *to)?.to_vec(),
        BitQualifier::All => {
            if num_bits == 0 {
                return Ok(Vec::new());
            }
            all_bits(num_bits)?.to_vec()
        }
    };

    for &bit in &resolved {
        check_bit(bit, num_bits)?;
    }
    Ok(resolved)
}

/// Resolve o qualificador para um intervalo contíguo
///
/// Uma lista só é aceita quando forma uma sequência crescente sem buracos.
pub fn resolve_to_range(bits: &BitQualifier, num_bits: usize) -> QuantumResult<BitRange> {
    let range = match bits {
        BitQualifier::Bit(bit) => BitRange {
            from: *bit,
            to: *bit,
        },
        BitQualifier::Range { from, to } => BitRange::new(*from, *to)?,
        BitQualifier::All => all_bits(num_bits)?,
        BitQualifier::Bits(list) => {
            let contiguous = !list.is_empty() && list.windows(2).all(|w| w[1] == w[0] + 1);
            if !contiguous {
                return Err(QuantumError::BitQualifier(format!(
                    "bit qualification must be either: a number, all, \
                     or a contiguous from..to range (got {list:?})"
                )));
            }
            BitRange {
                from: list[0],
                to: list[list.len() - 1],
            }
        }
    };

    check_bit(range.to, num_bits)?;
    Ok(range)
}

/// Máscara com os bits listados; `None` significa "sem condição"
///
/// Bits repetidos são idempotentes.
pub fn build_mask(bits: Option<&[usize]>) -> Option<u64> {
    bits.map(|bits| bits.iter().fold(0u64, |mask, &bit| mask | (1u64 << bit)))
}

/// Falha se algum índice aparece tanto no controle quanto no alvo
pub fn validate_disjoint(control_bits: &[usize], target_bits: &[usize]) -> QuantumResult<()> {
    if control_bits.iter().any(|bit| target_bits.contains(bit)) {
        return Err(QuantumError::Overlap);
    }
    Ok(())
}

/// `width` bits menos significativos ligados
pub fn low_mask(width: usize) -> u64 {
    if width >= MAX_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Interpreta `"0101"` ou `"|0101>"`; devolve (valor, número de bits)
pub fn parse_bit_string(bit_string: &str) -> QuantumResult<(u64, usize)> {
    let trimmed = bit_string.trim();
    let bits = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let bits = bits.strip_suffix('>').unwrap_or(bits);

    if bits.is_empty() || !bits.chars().all(|c| c == '0' || c == '1') {
        return Err(QuantumError::InvalidBitString(bit_string.to_string()));
    }
    if bits.len() > MAX_BITS {
        return Err(QuantumError::TooManyBits(bits.len()));
    }

    let value = u64::from_str_radix(bits, 2)
        .map_err(|_| QuantumError::InvalidBitString(bit_string.to_string()))?;
    Ok((value, bits.len()))
}

/// Representação binária com zeros à esquerda
///
/// Zero em largura zero é a string vazia (registrador ou medição sem bits).
pub fn pad_bits(value: u64, width: usize) -> String {
    if value == 0 && width == 0 {
        return String::new();
    }
    format!("{value:0width$b}")
}
