//! Elementwise power operator
//!
//! Each domain keeps its own special-value policy:
//!
//! - real: IEEE 754 `pow` (`0^0 = 1`, `1^inf = 1`, `0^inf = 0`, `(-1)^inf = 1`)
//! - complex: `z^0 = 1`; `0^p` is zero for a positive real `p` and NaN
//!   otherwise; small integral real exponents use repeated squaring
//! - quaternion: `0^0 = 1`, `0^p = 0`, otherwise `exp(ln(q) p)`

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::dispatch::ResultSet;
use crate::domain::Values;
use crate::error::{Error, Result};
use crate::grid::PowerOperands;

pub const BASE: &str = "base";
pub const EXPONENT: &str = "exponent";
pub const POW: &str = "pow";

/// Exponents in `(-LIMIT, LIMIT)` with no fractional part use repeated squaring
const INTEGRAL_LIMIT: f64 = 100.;

/// Result set with `base`, `exponent` and `pow` columns
pub fn evaluate(operands: PowerOperands) -> Result<ResultSet> {
    let PowerOperands { base, exponent } = operands;

    if base.len() != exponent.len() {
        return Err(Error::LengthMismatch {
            name: EXPONENT.to_string(),
            expected: base.len(),
            found: exponent.len(),
        });
    }

    let pow: Values = match (&base, &exponent) {
        (Values::Real(b), Values::Real(e)) => {
            b.iter().zip(e).map(|(&b, &e)| b.powf(e)).collect::<Vec<_>>().into()
        }
        (Values::Complex(b), Values::Complex(e)) => {
            b.iter().zip(e).map(|(&b, &e)| complex_pow(b, e)).collect::<Vec<_>>().into()
        }
        (Values::Quaternion(b), Values::Quaternion(e)) => {
            b.iter().zip(e).map(|(&b, &e)| b.pow(e)).collect::<Vec<_>>().into()
        }
        _ => {
            return Err(Error::DomainMismatch {
                base: base.domain(),
                exponent: exponent.domain(),
            })
        }
    };

    let mut results = ResultSet::new();
    results.insert(BASE, base)?;
    results.insert(EXPONENT, exponent)?;
    results.insert(POW, pow)?;
    Ok(results)
}

pub fn complex_pow(base: Complex64, exponent: Complex64) -> Complex64 {
    if exponent.is_zero() {
        return Complex64::one();
    }

    if base.is_zero() {
        return if exponent.re > 0. && exponent.im == 0. {
            Complex64::zero()
        } else {
            Complex64::new(f64::NAN, f64::NAN)
        };
    }

    let n = exponent.re;
    if exponent.im == 0. && n.fract() == 0. && n.abs() < INTEGRAL_LIMIT {
        return complex_powi(base, n as i32);
    }

    base.powc(exponent)
}

/// Binary exponentiation, reciprocal taken last for negative `n`
fn complex_powi(base: Complex64, n: i32) -> Complex64 {
    match n {
        1 => return base,
        2 => return base * base,
        3 => return base * base * base,
        _ => {}
    }

    let mut bits = n.unsigned_abs();
    let mut square = base;
    let mut product = Complex64::one();
    while bits > 0 {
        if bits & 1 == 1 {
            product = product * square;
        }
        bits >>= 1;
        if bits > 0 {
            square = square * square;
        }
    }

    if n < 0 {
        Complex64::one() / product
    } else {
        product
    }
}
