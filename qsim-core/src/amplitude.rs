//! Visões de valor: um par (índice, amplitude) e o resultado de uma medição

use crate::bits::pad_bits;
use crate::complex::Complex;
use crate::state::QState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Um estado da base populado e sua amplitude
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeState {
    pub num_bits: usize,
    pub index: u64,
    pub amplitude: Complex,
}

impl AmplitudeState {
    pub fn new(num_bits: usize, index: u64, amplitude: Complex) -> Self {
        Self {
            num_bits,
            index,
            amplitude,
        }
    }

    pub fn as_number(&self) -> u64 {
        self.index
    }

    /// Índice em binário com `num_bits` dígitos
    pub fn as_bit_string(&self) -> String {
        pad_bits(self.index, self.num_bits)
    }

    /// Probabilidade de observar este estado
    pub fn probability(&self) -> f64 {
        self.amplitude.norm_sqr()
    }
}

/// Resultado de uma medição: valor observado e estado colapsado
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Quantidade de bits medidos
    pub num_bits: usize,
    pub result: u64,
    pub new_state: QState,
}

impl Measurement {
    pub fn new(num_bits: usize, result: u64, new_state: QState) -> Self {
        Self {
            num_bits,
            result,
            new_state,
        }
    }

    pub fn as_bit_string(&self) -> String {
        pad_bits(self.result, self.num_bits)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{result: {}, newState: {}}}", self.result, self.new_state)
    }
}
