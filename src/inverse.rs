//! Complex inverse trigonometric and hyperbolic functions
//!
//! Branch cuts follow C99 Annex G. A point lying on a cut is continuous with
//! the side named by the sign of its zero component, so `asin(2 + 0i)` and
//! `asin(2 - 0i)` are conjugates. Finite arguments use Kahan's formulas
//! ("Branch Cuts for Complex Elementary Functions"), which only ever form
//! `1 ± z` and `z ± 1` componentwise and therefore keep every signed zero.

use std::f64::consts::FRAC_PI_2;

use num_complex::Complex64;

/// `i z`
fn mul_i(z: Complex64) -> Complex64 {
    Complex64::new(-z.im, z.re)
}

/// `-i z`
fn mul_neg_i(z: Complex64) -> Complex64 {
    Complex64::new(z.im, -z.re)
}

/// Principal square root, `sqrt(x - 0i)` is the conjugate of `sqrt(x + 0i)`
fn sqrt(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);
    if x == 0. && y == 0. {
        return Complex64::new(0., y);
    }

    let t = ((x.abs() + x.hypot(y)) / 2.).sqrt();
    if x >= 0. {
        Complex64::new(t, y / (2. * t))
    } else {
        Complex64::new(y.abs() / (2. * t), t.copysign(y))
    }
}

pub fn asin(z: Complex64) -> Complex64 {
    if !z.is_finite() {
        return z.asin();
    }
    let s1 = sqrt(Complex64::new(1. - z.re, -z.im));
    let s2 = sqrt(Complex64::new(1. + z.re, z.im));
    Complex64::new(z.re.atan2((s1 * s2).re), (s1.conj() * s2).im.asinh())
}

pub fn acos(z: Complex64) -> Complex64 {
    if !z.is_finite() {
        return z.acos();
    }
    let s1 = sqrt(Complex64::new(1. - z.re, -z.im));
    let s2 = sqrt(Complex64::new(1. + z.re, z.im));
    Complex64::new(2. * s1.re.atan2(s2.re), (s2.conj() * s1).im.asinh())
}

pub fn acosh(z: Complex64) -> Complex64 {
    if !z.is_finite() {
        return z.acosh();
    }
    let s1 = sqrt(Complex64::new(z.re - 1., z.im));
    let s2 = sqrt(Complex64::new(z.re + 1., z.im));
    Complex64::new((s1.conj() * s2).re.asinh(), 2. * s1.im.atan2(s2.re))
}

/// `-i asin(i z)`
pub fn asinh(z: Complex64) -> Complex64 {
    mul_neg_i(asin(mul_i(z)))
}

/// Any infinite component maps to `±0 ± iπ/2`, other NaN inputs to NaN
pub fn atanh(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);
    if x.is_infinite() || y.is_infinite() {
        return Complex64::new(0f64.copysign(x), FRAC_PI_2.copysign(y));
    }
    if x.is_nan() || y.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    let (ax, ay) = (x.abs(), y.abs());
    let re = (4. * ax / ((ax - 1.) * (ax - 1.) + ay * ay)).ln_1p() / 4.;
    let im = (2. * ay).atan2((1. - ax) * (1. + ax) - ay * ay) / 2.;
    Complex64::new(re.copysign(x), im.copysign(y))
}

/// `-i atanh(i z)`
pub fn atan(z: Complex64) -> Complex64 {
    mul_neg_i(atanh(mul_i(z)))
}
