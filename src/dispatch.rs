use tracing::debug;

use crate::domain::Values;
use crate::error::{Error, Result};
use crate::function::UnaryFn;
use crate::naming::normalize;

pub const INPUT: &str = "input";

/// Named columns of one generation call, in insertion order
///
/// All columns have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, Values)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, replacing an existing column of the same name in place
    pub fn insert<S: Into<String>>(&mut self, name: S, values: Values) -> Result<()> {
        let name = name.into();

        if let Some((_, first)) = self.entries.first() {
            if first.len() != values.len() {
                return Err(Error::LengthMismatch {
                    name,
                    expected: first.len(),
                    found: values.len(),
                });
            }
        }

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((name, values)),
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Values> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Values)> + '_ {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of grid points, zero for an empty set
    pub fn rows(&self) -> usize {
        self.entries.first().map_or(0, |(_, values)| values.len())
    }
}

/// Evaluates every function on `input`
///
/// The unmodified input comes first under [`INPUT`]. Functions without a
/// definition on the input's domain are skipped. NaN and infinite results
/// are kept as they are.
pub fn dispatch(input: Values, functions: &[UnaryFn]) -> Result<ResultSet> {
    let domain = input.domain();
    let mut results = ResultSet::new();
    results.insert(INPUT, input.clone())?;

    for &function in functions {
        let name = normalize(function.name());

        if !function.supports(domain) {
            debug!(function = %name, %domain, "no definition on this domain, skipping");
            continue;
        }

        let output = function.apply(&input)?;
        let non_finite = output.non_finite();
        if non_finite > 0 {
            debug!(function = %name, %domain, non_finite, "recorded non-finite values");
        }
        results.insert(name, output)?;
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::grid::{quaternion_inputs, Grid};
    use hypercomplex::Quaternion;

    #[test]
    fn input_column_comes_first() {
        let input = Values::Real(vec![-1., 0., 1.]);
        let results = dispatch(input.clone(), &[UnaryFn::Exp, UnaryFn::Arccos]).unwrap();
        assert_eq!(vec!["input", "exp", "acos"], results.names().collect::<Vec<_>>());
        assert_eq!(Some(&input), results.get("input"));
    }

    #[test]
    fn no_functions_still_records_input() {
        let input = Values::Real(vec![2.]);
        let results = dispatch(input, &[]).unwrap();
        assert_eq!(vec!["input"], results.names().collect::<Vec<_>>());
        assert_eq!(1, results.rows());
    }

    #[test]
    fn quaternion_skips_trigonometric_functions() {
        let grid = Grid::new(vec![-1., 0., 1.]);
        let input = Values::Quaternion(quaternion_inputs(&grid));
        let functions = [UnaryFn::Abs, UnaryFn::Sin, UnaryFn::Exp, UnaryFn::Arctanh];
        let results = dispatch(input, &functions).unwrap();

        assert_eq!(vec!["input", "abs", "exp"], results.names().collect::<Vec<_>>());
        assert_eq!(Some(Domain::Real), results.get("abs").map(Values::domain));
        assert_eq!(Some(Domain::Quaternion), results.get("exp").map(Values::domain));
        assert_eq!(81, results.rows());
    }

    #[test]
    fn names_are_normalized_on_every_domain() {
        let functions = [UnaryFn::Log, UnaryFn::Conjugate];
        let real = dispatch(Values::Real(vec![1.]), &functions).unwrap();
        let quat = dispatch(Values::Quaternion(vec![Quaternion::one()]), &functions).unwrap();
        assert_eq!(vec!["input", "ln", "conj"], real.names().collect::<Vec<_>>());
        assert_eq!(vec!["input", "ln", "conj"], quat.names().collect::<Vec<_>>());
    }

    #[test]
    fn insert_rejects_length_mismatch() {
        let mut results = ResultSet::new();
        results.insert("a", Values::Real(vec![1., 2.])).unwrap();
        let err = results.insert("b", Values::Real(vec![1.])).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut results = ResultSet::new();
        results.insert("a", Values::Real(vec![1.])).unwrap();
        results.insert("b", Values::Real(vec![2.])).unwrap();
        results.insert("a", Values::Real(vec![3.])).unwrap();
        assert_eq!(vec!["a", "b"], results.names().collect::<Vec<_>>());
        assert_eq!(Some(&Values::Real(vec![3.])), results.get("a"));
    }
}
