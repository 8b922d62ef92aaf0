//! Quaternion values for the gmath test-vector generator
//!
//! A [`Quaternion`] is a plain data container (`w + xi + yj + zk`) with the
//! handful of operations needed to evaluate the unary functions and the power
//! operator that the generated test vectors record:
//!
//! - [x] Hamilton product
//! - [x] Conjugate
//! - [x] Norm, Norm2
//! - [x] exp, ln, sqrt
//! - [x] Scalar power, quaternion power, cube root
//! - [x] Arg
//! - [ ] Trigonometric and hyperbolic functions (no quaternion definition here)

use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use num_traits::{Float, FloatConst};

mod transcendental;


pub trait Conjugate {
    type Output;
    fn conj(self) -> Self::Output;
}

pub trait Norm2 {
    type Output;
    fn norm2(self) -> Self::Output;
}

pub trait Norm {
    type Output;
    fn norm(self) -> Self::Output;
}

/// Floating point types a [`Quaternion`] can be built from
pub trait Scalar: Float + FloatConst + Pod {
    /// Below this relative size the vector part is treated as zero
    const EPS: Self;
}

impl Scalar for f64 {
    const EPS: f64 = 1e-14;
}

/// `w + xi + yj + zk`, scalar first
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Quaternion<T = f64> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

unsafe impl<T: Zeroable> Zeroable for Quaternion<T> {}

unsafe impl<T: Pod> Pod for Quaternion<T> {}

impl<T> Quaternion<T> {
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Quaternion { w, x, y, z }
    }
}

impl<T: Scalar> Quaternion<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::from_real(T::one())
    }

    pub fn from_real(w: T) -> Self {
        Self::new(w, T::zero(), T::zero(), T::zero())
    }

    /// True unless every component equals zero; NaN components count as nonzero
    pub fn is_nonzero(&self) -> bool {
        !(self.w == T::zero() && self.x == T::zero() && self.y == T::zero() && self.z == T::zero())
    }

    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Length of the vector part
    pub fn vector_norm(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Multiplies every component by `s`
    pub fn scale(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

/// Hamilton product
impl<T> Mul for Quaternion<T>
where
    T: Mul<Output = T> + Add<Output = T> + Sub<Output = T> + Copy,
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Quaternion {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

impl<T: Neg<Output = T>> Conjugate for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn conj(self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Scalar> Norm2 for Quaternion<T> {
    type Output = T;
    #[inline]
    fn norm2(self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl<T: Scalar> Norm for Quaternion<T> {
    type Output = T;
    #[inline]
    fn norm(self) -> T {
        self.norm2().sqrt()
    }
}
