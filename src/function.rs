use hypercomplex::{Conjugate, Quaternion};
use num_complex::Complex64;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::domain::{Domain, Values};
use crate::error::{Error, Result};
use crate::inverse;

/// Unary functions recorded in the test vectors
///
/// The string form is the function's reported library name (`arccos`,
/// `log`, `conjugate`); column names are derived from it by
/// [`normalize`](crate::naming::normalize).
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum UnaryFn {
    Abs,
    Arccos,
    Arcsin,
    Arctan,
    Cos,
    Sin,
    Tan,
    Arccosh,
    Arcsinh,
    Arctanh,
    Cosh,
    Sinh,
    Tanh,
    Exp,
    Log,
    Sqrt,
    Cbrt,
    Arg,
    Conjugate,
}

impl UnaryFn {
    pub const TRIGONOMETRIC: [UnaryFn; 12] = [
        UnaryFn::Arccos,
        UnaryFn::Arcsin,
        UnaryFn::Arctan,
        UnaryFn::Cos,
        UnaryFn::Sin,
        UnaryFn::Tan,
        UnaryFn::Arccosh,
        UnaryFn::Arcsinh,
        UnaryFn::Arctanh,
        UnaryFn::Cosh,
        UnaryFn::Sinh,
        UnaryFn::Tanh,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Capability table: whether `self` has a definition on `domain`
    pub fn supports(self, domain: Domain) -> bool {
        use UnaryFn::*;
        match domain {
            Domain::Real | Domain::Complex => true,
            Domain::Quaternion => matches!(self, Abs | Exp | Log | Sqrt | Cbrt | Arg | Conjugate),
        }
    }

    /// Applies `self` to every element of `input`
    ///
    /// `abs` and `arg` always produce a real column; every other function
    /// keeps the input's domain.
    pub fn apply(self, input: &Values) -> Result<Values> {
        if !self.supports(input.domain()) {
            return Err(Error::Unsupported {
                function: self,
                domain: input.domain(),
            });
        }

        let output: Values = match input {
            Values::Real(values) => values.iter().map(|&x| self.real(x)).collect::<Vec<_>>().into(),
            Values::Complex(values) => match self {
                UnaryFn::Abs => values.iter().map(|z| z.norm()).collect::<Vec<_>>().into(),
                UnaryFn::Arg => values.iter().map(|z| z.arg()).collect::<Vec<_>>().into(),
                _ => values.iter().map(|&z| self.complex(z)).collect::<Vec<_>>().into(),
            },
            Values::Quaternion(values) => match self {
                UnaryFn::Abs => values.iter().map(|q| q.abs()).collect::<Vec<_>>().into(),
                UnaryFn::Arg => values.iter().map(|q| q.arg()).collect::<Vec<_>>().into(),
                _ => values.iter().map(|&q| self.quaternion(q)).collect::<Vec<_>>().into(),
            },
        };

        Ok(output)
    }

    fn real(self, x: f64) -> f64 {
        use UnaryFn::*;
        match self {
            Abs => x.abs(),
            Arccos => x.acos(),
            Arcsin => x.asin(),
            Arctan => x.atan(),
            Cos => x.cos(),
            Sin => x.sin(),
            Tan => x.tan(),
            Arccosh => x.acosh(),
            Arcsinh => x.asinh(),
            Arctanh => x.atanh(),
            Cosh => x.cosh(),
            Sinh => x.sinh(),
            Tanh => x.tanh(),
            Exp => x.exp(),
            Log => x.ln(),
            Sqrt => x.sqrt(),
            Cbrt => x.cbrt(),
            Arg => {
                if x < 0. {
                    std::f64::consts::PI
                } else {
                    0.
                }
            }
            Conjugate => x,
        }
    }

    /// `Abs` and `Arg` are handled by `apply`
    fn complex(self, z: Complex64) -> Complex64 {
        use UnaryFn::*;
        match self {
            Arccos => inverse::acos(z),
            Arcsin => inverse::asin(z),
            Arctan => inverse::atan(z),
            Cos => z.cos(),
            Sin => z.sin(),
            Tan => z.tan(),
            Arccosh => inverse::acosh(z),
            Arcsinh => inverse::asinh(z),
            Arctanh => inverse::atanh(z),
            Cosh => z.cosh(),
            Sinh => z.sinh(),
            Tanh => z.tanh(),
            Exp => z.exp(),
            Log => z.ln(),
            Sqrt => z.sqrt(),
            // principal root, the real-only cube root rejects complex input
            Cbrt => z.cbrt(),
            Conjugate => z.conj(),
            Abs | Arg => unreachable!("real-valued on complex input"),
        }
    }

    /// Only called for functions in the quaternion capability table
    fn quaternion(self, q: Quaternion<f64>) -> Quaternion<f64> {
        use UnaryFn::*;
        match self {
            Exp => q.exp(),
            Log => q.ln(),
            Sqrt => q.sqrt(),
            Cbrt => q.cbrt(),
            Conjugate => q.conj(),
            _ => unreachable!("{self} has no quaternion definition"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn reported_names() {
        assert_eq!("abs", UnaryFn::Abs.name());
        assert_eq!("arccos", UnaryFn::Arccos.name());
        assert_eq!("arctanh", UnaryFn::Arctanh.name());
        assert_eq!("log", UnaryFn::Log.name());
        assert_eq!("conjugate", UnaryFn::Conjugate.name());
        assert_eq!("cbrt", UnaryFn::Cbrt.to_string());
    }

    #[test]
    fn quaternion_capabilities() {
        let supported = UnaryFn::iter()
            .filter(|f| f.supports(Domain::Quaternion))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                UnaryFn::Abs,
                UnaryFn::Exp,
                UnaryFn::Log,
                UnaryFn::Sqrt,
                UnaryFn::Cbrt,
                UnaryFn::Arg,
                UnaryFn::Conjugate,
            ],
            supported
        );
        for f in UnaryFn::TRIGONOMETRIC {
            assert!(!f.supports(Domain::Quaternion));
        }
    }

    #[test]
    fn real_and_complex_support_everything() {
        assert!(UnaryFn::iter().all(|f| f.supports(Domain::Real)));
        assert!(UnaryFn::iter().all(|f| f.supports(Domain::Complex)));
    }

    #[test]
    fn trigonometric_on_quaternion_is_an_error() {
        let input = Values::Quaternion(vec![Quaternion::one()]);
        let err = UnaryFn::Cos.apply(&input).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsupported {
                function: UnaryFn::Cos,
                domain: Domain::Quaternion
            }
        ));
    }

    #[test]
    fn real_singularities_are_recorded() {
        let input = Values::Real(vec![-1., 0., 2.]);

        let Values::Real(sqrt) = UnaryFn::Sqrt.apply(&input).unwrap() else {
            panic!("sqrt of reals is real");
        };
        assert!(sqrt[0].is_nan());
        assert_eq!(0., sqrt[1]);

        let Values::Real(ln) = UnaryFn::Log.apply(&input).unwrap() else {
            panic!("ln of reals is real");
        };
        assert_eq!(f64::NEG_INFINITY, ln[1]);

        let Values::Real(acosh) = UnaryFn::Arccosh.apply(&input).unwrap() else {
            panic!("acosh of reals is real");
        };
        assert!(acosh[0].is_nan());
        assert!(acosh[1].is_nan());
    }

    #[test]
    fn real_arg_and_conjugate() {
        let input = Values::Real(vec![-2., 0., 3.]);
        assert_eq!(
            Values::Real(vec![std::f64::consts::PI, 0., 0.]),
            UnaryFn::Arg.apply(&input).unwrap()
        );
        assert_eq!(input, UnaryFn::Conjugate.apply(&input).unwrap());
    }

    #[test]
    fn real_cbrt_of_negative_is_real() {
        let input = Values::Real(vec![-8.]);
        assert_eq!(Values::Real(vec![-2.]), UnaryFn::Cbrt.apply(&input).unwrap());
    }

    #[test]
    fn real_cbrt_is_within_one_ulp_of_glibc() {
        let input = Values::Real(vec![2., -5.]);
        let Values::Real(root) = UnaryFn::Cbrt.apply(&input).unwrap() else {
            panic!("cbrt of reals is real");
        };
        assert_abs_diff_eq!(1.2599210498948734, root[0], epsilon = 3e-16);
        assert_abs_diff_eq!(-1.709975946676697, root[1], epsilon = 3e-16);
    }

    #[test]
    fn complex_abs_and_arg_are_real_columns() {
        let input = Values::Complex(vec![Complex64::new(3., 4.), Complex64::new(0., -1.)]);
        assert_eq!(
            Values::Real(vec![5., 1.]),
            UnaryFn::Abs.apply(&input).unwrap()
        );
        assert_eq!(
            Values::Real(vec![(4f64).atan2(3.), -std::f64::consts::FRAC_PI_2]),
            UnaryFn::Arg.apply(&input).unwrap()
        );
    }

    #[test]
    fn complex_cbrt_is_principal() {
        let input = Values::Complex(vec![Complex64::new(-8., 0.)]);
        let Values::Complex(root) = UnaryFn::Cbrt.apply(&input).unwrap() else {
            panic!("cbrt of complex is complex");
        };
        assert_abs_diff_eq!(1., root[0].re, epsilon = 1e-12);
        assert_abs_diff_eq!(3f64.sqrt(), root[0].im, epsilon = 1e-12);
    }

    #[test]
    fn complex_inverse_functions_respect_signed_zero_cuts() {
        use std::f64::consts::{FRAC_PI_2, PI};
        let acosh_2 = 1.3169578969248166;
        let atanh_3 = 0.5493061443340549;

        let on_cut = |function: UnaryFn, z: Complex64| {
            let Values::Complex(out) = function.apply(&Values::Complex(vec![z])).unwrap() else {
                panic!("{function} of complex is complex");
            };
            out[0]
        };
        let check = |expected: (f64, f64), actual: Complex64| {
            assert_abs_diff_eq!(expected.0, actual.re, epsilon = 1e-15);
            assert_abs_diff_eq!(expected.1, actual.im, epsilon = 1e-15);
        };

        check((FRAC_PI_2, acosh_2), on_cut(UnaryFn::Arcsin, Complex64::new(2., 0.)));
        check((0., -acosh_2), on_cut(UnaryFn::Arccos, Complex64::new(2., 0.)));
        check((atanh_3, FRAC_PI_2), on_cut(UnaryFn::Arctanh, Complex64::new(2., 0.)));
        check((FRAC_PI_2, -atanh_3), on_cut(UnaryFn::Arctan, Complex64::new(0., -2.)));
        check((acosh_2, -FRAC_PI_2), on_cut(UnaryFn::Arcsinh, Complex64::new(0., -2.)));
        check((acosh_2, PI), on_cut(UnaryFn::Arccosh, Complex64::new(-2., 0.)));
    }

    #[test]
    fn quaternion_abs_is_real_column() {
        let input = Values::Quaternion(vec![Quaternion::new(1., 2., 2., 4.)]);
        assert_eq!(Values::Real(vec![5.]), UnaryFn::Abs.apply(&input).unwrap());
    }

    #[test]
    fn quaternion_conjugate() {
        let input = Values::Quaternion(vec![Quaternion::new(1., 2., -3., 4.)]);
        assert_eq!(
            Values::Quaternion(vec![Quaternion::new(1., -2., 3., -4.)]),
            UnaryFn::Conjugate.apply(&input).unwrap()
        );
    }
}
