use hypercomplex::Quaternion;
use num_complex::Complex64;

use crate::dispatch::ResultSet;
use crate::domain::Values;
use crate::error::{Error, Result};

pub const COMPLEX_SUFFIXES: [&str; 2] = ["real", "imag"];

/// Real part first, then the `i`, `j`, `k` parts
pub const QUATERNION_SUFFIXES: [&str; 4] = ["real", "imag", "jmag", "kmag"];

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Scalar columns ready to be written, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecordSet {
    columns: Vec<Column>,
}

impl FlatRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<String>>(&mut self, name: S, values: Vec<f64>) {
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Common length of all columns
    ///
    /// Fails on the first column whose length differs from the first column's.
    pub fn rows(&self) -> Result<usize> {
        let Some(first) = self.columns.first() else {
            return Ok(0);
        };
        let expected = first.values.len();

        match self.columns.iter().find(|c| c.values.len() != expected) {
            Some(column) => Err(Error::RaggedColumns {
                column: column.name.clone(),
                expected,
                found: column.values.len(),
            }),
            None => Ok(expected),
        }
    }
}

/// Splits every column of `results` into scalar columns
///
/// Real columns keep their name, complex and quaternion columns become one
/// `<name>_<suffix>` column per component. An empty column stays a single
/// empty column under its own name.
pub fn flatten(results: &ResultSet) -> FlatRecordSet {
    let mut flat = FlatRecordSet::new();

    for (name, values) in results.iter() {
        if values.is_empty() {
            flat.push(name, Vec::new());
            continue;
        }

        match values {
            Values::Real(v) => flat.push(name, v.clone()),
            Values::Complex(v) => split(
                &mut flat,
                name,
                components::<Complex64, 2>(v),
                COMPLEX_SUFFIXES,
            ),
            Values::Quaternion(v) => split(
                &mut flat,
                name,
                components::<Quaternion<f64>, 4>(v),
                QUATERNION_SUFFIXES,
            ),
        }
    }

    flat
}

/// Views each value as its `N` scalar components
fn components<T, const N: usize>(values: &[T]) -> &[[f64; N]]
where
    T: bytemuck::Pod,
    [f64; N]: bytemuck::Pod,
{
    bytemuck::cast_slice(values)
}

fn split<const N: usize>(
    flat: &mut FlatRecordSet,
    name: &str,
    rows: &[[f64; N]],
    suffixes: [&str; N],
) {
    for (axis, suffix) in suffixes.iter().enumerate() {
        let column = rows.iter().map(|row| row[axis]).collect();
        flat.push(format!("{name}_{suffix}"), column);
    }
}
