//! Aritmética clássica usada pela busca de período e pela fatoração

/// Máximo divisor comum (Euclides)
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Mínimo múltiplo comum; `lcm(0, x) == 0`
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// `base^exponent mod modulus` por quadrados sucessivos
pub fn power_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let modulus = u128::from(modulus);
    let mut result = 1u128;
    let mut base = u128::from(base) % modulus;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result as u64
}

/// Se `n = a^b` com `b >= 2`, devolve `a`; senão 1
pub fn power_factor(n: u64) -> u64 {
    if n < 4 {
        return 1;
    }
    let max_exponent = 64 - n.leading_zeros();
    for exponent in 2..=max_exponent {
        let root = (n as f64).powf(1.0 / f64::from(exponent)).round() as u64;
        for candidate in [root.saturating_sub(1), root, root + 1] {
            if candidate > 1 && candidate.checked_pow(exponent) == Some(n) {
                return candidate;
            }
        }
    }
    1
}

/// Aproximação racional de um real por frações contínuas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinuedFraction {
    pub quotients: Vec<i64>,
    pub numerator: i64,
    pub denominator: i64,
}

/// Expande `target` até que `|target - p/q| <= precision`
///
/// O denominador devolvido é sempre positivo. Para alvos muito pequenos a
/// expansão termina no último convergente que cabe em `i64`.
pub fn continued_fraction(target: f64, precision: f64) -> ContinuedFraction {
    let first = if target.abs() >= 1.0 { target.trunc() } else { 0.0 };
    let mut remainder = target - first;

    let mut two_ago = (1i64, 0i64);
    let mut one_ago = (first as i64, 1i64);
    let mut quotients = vec![first as i64];

    while (target - one_ago.0 as f64 / one_ago.1 as f64).abs() > precision && remainder != 0.0
    {
        let reciprocal = 1.0 / remainder;
        let quotient = reciprocal.trunc();
        remainder = reciprocal - quotient;

        let quotient = quotient as i64;
        let convergent = |previous: i64, before: i64| {
            quotient.checked_mul(previous)?.checked_add(before)
        };
        // para no último convergente representável em i64
        let (Some(numerator), Some(denominator)) =
            (convergent(one_ago.0, two_ago.0), convergent(one_ago.1, two_ago.1))
        else {
            break;
        };
        quotients.push(quotient);
        let current = (numerator, denominator);
        two_ago = one_ago;
        one_ago = current;
    }

    let (mut numerator, mut denominator) = one_ago;
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }
    ContinuedFraction {
        quotients,
        numerator,
        denominator,
    }
}
