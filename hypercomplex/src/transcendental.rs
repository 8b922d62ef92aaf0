use super::*;

impl<T: Scalar> Quaternion<T> {
    /// Euclidean norm of all four components
    #[inline]
    pub fn abs(self) -> T {
        self.norm()
    }

    /// Angle between `self` and the positive real axis, zero for the zero quaternion
    pub fn arg(self) -> T {
        let norm = self.norm();
        if norm == T::zero() {
            T::zero()
        } else {
            (self.w / norm).acos()
        }
    }

    pub fn exp(self) -> Self {
        let v = self.vector_norm();
        if v > T::EPS {
            let s = v.sin() / v;
            let e = self.w.exp();
            Self::new(e * v.cos(), e * s * self.x, e * s * self.y, e * s * self.z)
        } else {
            Self::from_real(self.w.exp())
        }
    }

    /// Principal logarithm
    ///
    /// A negative real input has no unique logarithm; the `i` axis is picked.
    pub fn ln(self) -> Self {
        let b = self.vector_norm();
        if b.abs() <= T::EPS * self.w.abs() {
            if self.w < T::zero() {
                let w = if (self.w + T::one()).abs() > T::EPS {
                    (-self.w).ln()
                } else {
                    T::zero()
                };
                Self::new(w, T::PI(), T::zero(), T::zero())
            } else {
                Self::from_real(self.w.ln())
            }
        } else {
            let f = b.atan2(self.w) / b;
            let two = T::one() + T::one();
            let w = (self.w * self.w + b * b).ln() / two;
            Self::new(w, f * self.x, f * self.y, f * self.z)
        }
    }

    /// Principal square root
    ///
    /// A negative real input has no unique root; the `i` axis is picked.
    pub fn sqrt(self) -> Self {
        let norm2 = self.norm2();
        if norm2 <= T::min_positive_value() {
            return Self::zero();
        }
        let norm = norm2.sqrt();
        if (norm + self.w).abs() < T::EPS * norm {
            Self::new(T::zero(), norm.sqrt(), T::zero(), T::zero())
        } else {
            let half = T::one() / (T::one() + T::one());
            let c = (half / (norm + self.w)).sqrt();
            Self::new((norm + self.w) * c, self.x * c, self.y * c, self.z * c)
        }
    }

    /// `self` raised to a real power
    pub fn powf(self, s: T) -> Self {
        if !self.is_nonzero() {
            return if s == T::zero() {
                Self::one()
            } else {
                Self::zero()
            };
        }
        self.ln().scale(s).exp()
    }

    /// `exp(ln(self) * p)`
    ///
    /// Quaternion multiplication does not commute, so this is one of two
    /// reasonable definitions. A zero base yields one for a zero exponent
    /// and zero otherwise.
    pub fn pow(self, p: Self) -> Self {
        if !self.is_nonzero() {
            return if p.is_nonzero() {
                Self::zero()
            } else {
                Self::one()
            };
        }
        (self.ln() * p).exp()
    }

    /// Principal cube root, `self^(1/3)`
    pub fn cbrt(self) -> Self {
        let three = T::one() + T::one() + T::one();
        self.powf(T::one() / three)
    }
}
