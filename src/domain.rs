use hypercomplex::Quaternion;
use num_complex::Complex64;
use strum::{Display, EnumIter};

/// Numeric domain under test
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Domain {
    Real,
    Complex,
    Quaternion,
}

/// A column of values sharing one domain
///
/// The tag is fixed when the column is built, so a column can never mix
/// domains.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Real(Vec<f64>),
    Complex(Vec<Complex64>),
    Quaternion(Vec<Quaternion<f64>>),
}

impl Values {
    pub fn domain(&self) -> Domain {
        match self {
            Values::Real(_) => Domain::Real,
            Values::Complex(_) => Domain::Complex,
            Values::Quaternion(_) => Domain::Quaternion,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Real(v) => v.len(),
            Values::Complex(v) => v.len(),
            Values::Quaternion(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries with a NaN or infinite component
    pub fn non_finite(&self) -> usize {
        match self {
            Values::Real(v) => v.iter().filter(|x| !x.is_finite()).count(),
            Values::Complex(v) => v.iter().filter(|z| !z.is_finite()).count(),
            Values::Quaternion(v) => v.iter().filter(|q| !q.is_finite()).count(),
        }
    }
}

impl From<Vec<f64>> for Values {
    fn from(values: Vec<f64>) -> Self {
        Values::Real(values)
    }
}

impl From<Vec<Complex64>> for Values {
    fn from(values: Vec<Complex64>) -> Self {
        Values::Complex(values)
    }
}

impl From<Vec<Quaternion<f64>>> for Values {
    fn from(values: Vec<Quaternion<f64>>) -> Self {
        Values::Quaternion(values)
    }
}
