//! # Complex — amplitudes de probabilidade
//!
//! Número complexo imutável. Toda operação devolve um novo valor; nenhum
//! operando é alterado. A igualdade é exata (campo a campo, sem tolerância).

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Número complexo `re + im·i`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Opções de formatação para [`Complex::format`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Arredonda ambas as partes para esse número de casas decimais
    pub decimal_places: Option<u32>,
    /// Prefixa `" + "` ou `" - "` para concatenar termos de uma soma
    pub spaced_sign: bool,
}

impl FormatOptions {
    pub fn rounded(decimal_places: u32) -> Self {
        Self {
            decimal_places: Some(decimal_places),
            spaced_sign: false,
        }
    }

    pub fn with_spaced_sign(mut self) -> Self {
        self.spaced_sign = true;
        self
    }
}

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// 1/√2
    pub const SQRT1_2: Self = Self {
        re: FRAC_1_SQRT_2,
        im: 0.0,
    };

    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Número real (parte imaginária zero)
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// e^(i·theta)
    pub fn from_polar(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    pub fn add(self, other: impl Into<Complex>) -> Self {
        let other = other.into();
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    pub fn subtract(self, other: impl Into<Complex>) -> Self {
        let other = other.into();
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    pub fn multiply(self, other: impl Into<Complex>) -> Self {
        let other = other.into();
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    pub fn negate(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }

    /// Conjugado
    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Módulo ao quadrado (probabilidade da amplitude)
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Módulo
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Fase (argumento)
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Igualdade exata das duas partes
    pub fn eql(&self, other: &Complex) -> bool {
        self.re == other.re && self.im == other.im
    }

    /// Formata para exibição, opcionalmente arredondado e com sinal espaçado.
    ///
    /// Com `spaced_sign`, o sinal vem da parte real; quando ela é zero,
    /// da parte imaginária. Um termo negativo é negado e prefixado com `" - "`.
    pub fn format(&self, options: FormatOptions) -> String {
        let mut value = *self;
        if let Some(places) = options.decimal_places {
            let magnitude = 10f64.powi(places as i32);
            value = Self {
                re: round_half_up(value.re * magnitude) / magnitude,
                im: round_half_up(value.im * magnitude) / magnitude,
            };
        }

        let mut prefix = "";
        if options.spaced_sign {
            let positive = if value.re != 0.0 {
                value.re > 0.0
            } else {
                value.im >= 0.0
            };
            if positive {
                prefix = " + ";
            } else {
                prefix = " - ";
                value = value.negate();
            }
        }

        format!("{prefix}{value}")
    }
}

// Arredondamento "meio para cima", mesmo para negativos (-2.5 -> -2)
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// -0.0 é exibido como 0
fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = without_negative_zero(self.re);
        let im = without_negative_zero(self.im);

        if im == 0.0 {
            return write!(f, "{re}");
        }

        let imaginary = if im == 1.0 {
            "i".to_string()
        } else if im == -1.0 {
            "-i".to_string()
        } else {
            format!("{im}i")
        };

        if re == 0.0 {
            return f.write_str(&imaginary);
        }

        let sign = if im < 0.0 { "" } else { "+" };
        write!(f, "{re}{sign}{imaginary}")
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(value: num_complex::Complex64) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(value: Complex) -> Self {
        num_complex::Complex64::new(value.re, value.im)
    }
}

impl<T: Into<Complex>> Add<T> for Complex {
    type Output = Complex;

    fn add(self, rhs: T) -> Complex {
        Complex::add(self, rhs)
    }
}

impl<T: Into<Complex>> Sub<T> for Complex {
    type Output = Complex;

    fn sub(self, rhs: T) -> Complex {
        self.subtract(rhs)
    }
}

impl<T: Into<Complex>> Mul<T> for Complex {
    type Output = Complex;

    fn mul(self, rhs: T) -> Complex {
        self.multiply(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}
