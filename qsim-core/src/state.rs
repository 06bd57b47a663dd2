//! # QState — registrador esparso
//!
//! Mapeia índices da base computacional para amplitudes complexas. Índices
//! ausentes têm amplitude zero, e nenhuma entrada armazenada tem módulo
//! menor ou igual a [`ROUNDING_EPSILON`]: toda escrita passa por
//! [`sparse_assign`], que descarta resíduos numéricos.
//!
//! O estado é um valor: toda operação devolve um novo `QState`.

use crate::amplitude::AmplitudeState;
use crate::bits::{MAX_BITS, parse_bit_string};
use crate::complex::{Complex, FormatOptions};
use crate::error::{QuantumError, QuantumResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

/// Amplitudes com módulo até este valor são tratadas como zero
pub const ROUNDING_EPSILON: f64 = 1e-10;

/// Casas decimais usadas por `Display`
pub const DISPLAY_DECIMAL_PLACES: u32 = 4;

pub(crate) type AmplitudeMap = BTreeMap<u64, Complex>;

/// Grava `value` em `index`, removendo a entrada quando é praticamente zero
pub(crate) fn sparse_assign(amplitudes: &mut AmplitudeMap, index: u64, value: Complex) {
    if value.magnitude() > ROUNDING_EPSILON {
        amplitudes.insert(index, value);
    } else {
        amplitudes.remove(&index);
    }
}

/// Estado quântico de `num_bits` qubits
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawQState")]
pub struct QState {
    num_bits: usize,
    amplitudes: AmplitudeMap,
}

/// Forma serializada, revalidada por [`QState::with_amplitudes`]
#[derive(Deserialize)]
struct RawQState {
    num_bits: usize,
    amplitudes: AmplitudeMap,
}

impl TryFrom<RawQState> for QState {
    type Error = QuantumError;

    fn try_from(raw: RawQState) -> Result<Self, Self::Error> {
        Self::with_amplitudes(raw.num_bits, raw.amplitudes)
    }
}

impl QState {
    /// Registrador |00…0⟩
    pub fn new(num_bits: usize) -> QuantumResult<Self> {
        Self::with_amplitudes(num_bits, [(0, Complex::ONE)])
    }

    /// Registrador com amplitudes explícitas (entradas quase nulas são descartadas)
    pub fn with_amplitudes(
        num_bits: usize,
        amplitudes: impl IntoIterator<Item = (u64, Complex)>,
    ) -> QuantumResult<Self> {
        if num_bits > MAX_BITS {
            return Err(QuantumError::TooManyBits(num_bits));
        }

        let mut map = AmplitudeMap::new();
        for (index, amplitude) in amplitudes {
            if num_bits < MAX_BITS && index >> num_bits != 0 {
                return Err(QuantumError::IndexOutOfRange { index, num_bits });
            }
            sparse_assign(&mut map, index, amplitude);
        }
        Ok(Self::from_parts(num_bits, map))
    }

    /// Estado da base descrito por `"0101"` ou `"|0101>"`
    pub fn from_bit_string(bit_string: &str) -> QuantumResult<Self> {
        let (value, num_bits) = parse_bit_string(bit_string)?;
        Self::with_amplitudes(num_bits, [(value, Complex::ONE)])
    }

    pub(crate) fn from_parts(num_bits: usize, amplitudes: AmplitudeMap) -> Self {
        Self {
            num_bits,
            amplitudes,
        }
    }

    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Quantidade de estados da base com amplitude não nula
    pub fn populated(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitude do estado da base `index` (zero quando ausente)
    pub fn amplitude(&self, index: u64) -> Complex {
        self.amplitudes.get(&index).copied().unwrap_or(Complex::ZERO)
    }

    /// Amplitude do estado descrito por uma string de bits
    pub fn amplitude_of(&self, bit_string: &str) -> QuantumResult<Complex> {
        let (index, _) = parse_bit_string(bit_string)?;
        Ok(self.amplitude(index))
    }

    /// Estados populados em ordem crescente de índice
    pub fn iter(&self) -> impl Iterator<Item = AmplitudeState> + '_ {
        self.amplitudes
            .iter()
            .map(|(&index, &amplitude)| AmplitudeState::new(self.num_bits, index, amplitude))
    }

    /// Visita os estados populados; `ControlFlow::Break` encerra a iteração
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(AmplitudeState) -> ControlFlow<()>,
    {
        for state in self.iter() {
            if callback(state).is_break() {
                break;
            }
        }
    }

    pub(crate) fn amplitudes(&self) -> &AmplitudeMap {
        &self.amplitudes
    }

    /// Multiplica todas as amplitudes (fase global ou escala)
    pub fn multiply(&self, amount: impl Into<Complex>) -> QState {
        let amount = amount.into();
        let mut amplitudes = AmplitudeMap::new();
        for (&index, &amplitude) in &self.amplitudes {
            sparse_assign(&mut amplitudes, index, amplitude.multiply(amount));
        }
        Self::from_parts(self.num_bits, amplitudes)
    }

    /// Soma amplitude a amplitude; o resultado normalmente precisa de `normalize`
    pub fn add(&self, other: &QState) -> QuantumResult<QState> {
        self.check_same_width(other)?;
        let mut amplitudes = self.amplitudes.clone();
        for (&index, &amplitude) in &other.amplitudes {
            let existing = amplitudes.get(&index).copied().unwrap_or(Complex::ZERO);
            sparse_assign(&mut amplitudes, index, amplitude.add(existing));
        }
        Ok(Self::from_parts(self.num_bits, amplitudes))
    }

    pub fn subtract(&self, other: &QState) -> QuantumResult<QState> {
        self.add(&other.multiply(-1.0))
    }

    /// Produto tensorial: `self` ocupa os bits mais significativos
    pub fn tensor_product(&self, other: &QState) -> QuantumResult<QState> {
        let num_bits = self.num_bits + other.num_bits;
        if num_bits > MAX_BITS {
            return Err(QuantumError::TooManyBits(num_bits));
        }

        let mut amplitudes = AmplitudeMap::new();
        for (&a, &amplitude_a) in &self.amplitudes {
            for (&b, &amplitude_b) in &other.amplitudes {
                let index = if other.num_bits == MAX_BITS { b } else { (a << other.num_bits) | b };
                sparse_assign(&mut amplitudes, index, amplitude_a.multiply(amplitude_b));
            }
        }
        Ok(Self::from_parts(num_bits, amplitudes))
    }

    /// Alias de [`QState::tensor_product`]
    pub fn kron(&self, other: &QState) -> QuantumResult<QState> {
        self.tensor_product(other)
    }

    /// Reescala para que a soma de |amplitude|² seja 1
    pub fn normalize(&self) -> QState {
        let total: f64 = self.amplitudes.values().map(|a| a.norm_sqr()).sum();
        if total == 0.0 {
            return self.clone();
        }
        self.multiply(1.0 / total.sqrt())
    }

    /// Igualdade exata: mesma largura e mesmas amplitudes em todos os índices
    pub fn eql(&self, other: &QState) -> bool {
        fn matched_by(lhs: &QState, rhs: &QState) -> bool {
            lhs.amplitudes
                .iter()
                .all(|(&index, amplitude)| amplitude.eql(&rhs.amplitude(index)))
        }

        self.num_bits == other.num_bits && matched_by(self, other) && matched_by(other, self)
    }

    fn check_same_width(&self, other: &QState) -> QuantumResult<()> {
        if self.num_bits != other.num_bits {
            return Err(QuantumError::WidthMismatch {
                left: self.num_bits,
                right: other.num_bits,
            });
        }
        Ok(())
    }
}

impl PartialEq for QState {
    fn eq(&self, other: &Self) -> bool {
        self.eql(other)
    }
}

impl FromStr for QState {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_string(s)
    }
}

impl fmt::Display for QState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = FormatOptions::rounded(DISPLAY_DECIMAL_PLACES);
        for (position, state) in self.iter().enumerate() {
            if position > 0 {
                options.spaced_sign = true;
            }
            let coefficient = state.amplitude.format(options);
            if coefficient != "1" {
                write!(f, "{coefficient} ")?;
            }
            write!(f, "|{}>", state.as_bit_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn approx(a: Complex, b: Complex) -> bool {
        a.subtract(b).magnitude() < 1e-4
    }

    #[test]
    fn test_new_defaults_to_zero_state() {
        let state = QState::new(3).unwrap();
        assert_eq!(state.to_string(), "|000>");
        assert_eq!(state.num_bits(), 3);
        assert_eq!(state.populated(), 1);
    }

    #[test]
    fn test_new_rejects_wide_registers() {
        assert_eq!(QState::new(65).unwrap_err(), QuantumError::TooManyBits(65));
        assert!(QState::new(64).is_ok());
    }

    #[test]
    fn test_with_amplitudes_prunes() {
        let state =
            QState::with_amplitudes(2, [(0, Complex::real(1e-12)), (3, Complex::ONE)]).unwrap();
        assert_eq!(state.populated(), 1);
        assert_eq!(state.amplitude(0), Complex::ZERO);

        let err = QState::with_amplitudes(2, [(4, Complex::ONE)]).unwrap_err();
        assert_eq!(err, QuantumError::IndexOutOfRange { index: 4, num_bits: 2 });
    }

    #[test]
    fn test_from_bit_string() {
        let state = QState::from_bit_string("|0101>").unwrap();
        assert_eq!(state.num_bits(), 4);
        assert_eq!(state.amplitude(5), Complex::ONE);
        assert_eq!(state.amplitude_of("0101").unwrap(), Complex::ONE);
        assert!(QState::from_bit_string("").is_err());
        assert_eq!("10".parse::<QState>().unwrap().amplitude(2), Complex::ONE);
    }

    #[test]
    fn test_each_stops_on_break() {
        let state = QState::with_amplitudes(
            2,
            [(0, Complex::real(0.5)), (1, Complex::real(0.5)), (3, Complex::real(0.5))],
        )
        .unwrap();
        let mut calls = 0;
        state.each(|_| {
            calls += 1;
            ControlFlow::Break(())
        });
        assert_eq!(calls, 1);

        let mut seen = Vec::new();
        state.each(|s| {
            seen.push(s.as_bit_string());
            ControlFlow::Continue(())
        });
        assert_eq!(seen, vec!["00", "01", "11"]);
    }

    #[test]
    fn test_multiply_by_complex_and_scalar() {
        let state = QState::with_amplitudes(
            1,
            [(0, Complex::real(FRAC_1_SQRT_2)), (1, Complex::real(-FRAC_1_SQRT_2))],
        )
        .unwrap();
        let scaled = state.multiply(Complex::new(3.0, -4.0));
        assert!(approx(scaled.amplitude(0), Complex::new(3.0, -4.0).multiply(FRAC_1_SQRT_2)));
        let doubled = state.multiply(2.0);
        assert!(approx(doubled.amplitude(1), Complex::real(-2f64.sqrt())));
    }

    #[test]
    fn test_add_and_subtract() {
        let a = QState::from_bit_string("|00>").unwrap();
        let b = QState::from_bit_string("|11>").unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.to_string(), "|00> + 1 |11>");
        assert_eq!(sum.subtract(&b).unwrap(), a);
        assert_eq!(a.subtract(&a).unwrap().populated(), 0);

        let narrow = QState::from_bit_string("|0>").unwrap();
        assert_eq!(
            a.add(&narrow).unwrap_err(),
            QuantumError::WidthMismatch { left: 2, right: 1 }
        );
    }

    #[test]
    fn test_tensor_product_places_self_high() {
        let high = QState::from_bit_string("|10>").unwrap();
        let low = QState::from_bit_string("|011>").unwrap();
        let product = high.tensor_product(&low).unwrap();
        assert_eq!(product.num_bits(), 5);
        assert_eq!(product.to_string(), "|10011>");
        assert_eq!(high.kron(&low).unwrap(), product);
    }

    #[test]
    fn test_normalize() {
        let state = QState::from_bit_string("|0>")
            .unwrap()
            .multiply(Complex::new(3.0, 4.0))
            .add(&QState::from_bit_string("|1>").unwrap().multiply(Complex::I))
            .unwrap()
            .normalize();
        let factor = 1.0 / 26f64.sqrt();
        assert!(approx(state.amplitude(1), Complex::new(0.0, factor)));
        assert!(approx(state.amplitude(0), Complex::new(3.0, 4.0).multiply(factor)));
    }

    #[test]
    fn test_eql() {
        let a = QState::from_bit_string("|01>").unwrap();
        assert!(a.eql(&QState::from_bit_string("01").unwrap()));
        assert!(!a.eql(&QState::from_bit_string("|10>").unwrap()));
        assert!(!a.eql(&QState::from_bit_string("|001>").unwrap()));
    }

    #[test]
    fn test_eql_with_extra_amplitudes() {
        let single = QState::from_bit_string("|00>").unwrap();
        let double = single.add(&QState::from_bit_string("|01>").unwrap()).unwrap();
        assert!(!double.eql(&single));
        assert!(!single.eql(&double));
    }

    #[test]
    fn test_display_signs() {
        let state = QState::with_amplitudes(
            3,
            [(0, Complex::real(FRAC_1_SQRT_2)), (4, Complex::real(-FRAC_1_SQRT_2))],
        )
        .unwrap();
        assert_eq!(state.to_string(), "0.7071 |000> - 0.7071 |100>");
    }

    #[test]
    fn test_serde_roundtrip_preserves_state() {
        let state =
            QState::with_amplitudes(2, [(1, Complex::new(0.6, 0.0)), (2, Complex::new(0.0, 0.8))])
                .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: QState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_revalidates_register() {
        let wide = r#"{"num_bits":100,"amplitudes":{"0":{"re":1.0,"im":0.0}}}"#;
        assert!(serde_json::from_str::<QState>(wide).is_err());

        let out_of_range = r#"{"num_bits":2,"amplitudes":{"4":{"re":1.0,"im":0.0}}}"#;
        assert!(serde_json::from_str::<QState>(out_of_range).is_err());

        let residue = r#"{
            "num_bits": 3,
            "amplitudes": {"0": {"re": 1.0, "im": 0.0}, "5": {"re": 0.0, "im": 0.0}}
        }"#;
        let state: QState = serde_json::from_str(residue).unwrap();
        assert_eq!(state.populated(), 1);
        assert_eq!(state.to_string(), "|000>");
        assert!(state.x(2).is_ok());
    }
}
