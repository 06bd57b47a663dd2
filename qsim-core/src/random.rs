//! Fonte de aleatoriedade injetável usada apenas pela medição

use rand::RngCore;

/// Produz amostras uniformes em `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Qualquer gerador do `rand` serve como fonte
impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        rand::Rng::gen_range(self, 0.0..1.0)
    }
}

/// Sempre devolve o mesmo valor (testes determinísticos)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Devolve os valores em sequência, repetindo o último quando esgotados
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let Some(last) = self.values.len().checked_sub(1) else {
            return 0.0;
        };
        let value = self.values[self.position.min(last)];
        self.position += 1;
        value
    }
}
