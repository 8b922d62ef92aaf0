//! Cartesian sample grids
//!
//! Every scenario input is a mesh over one literal [`Grid`]: a unary complex
//! input uses the grid for both the real and imaginary part, a quaternion
//! power input uses it for all eight components of base and exponent. Row
//! counts therefore grow as `|grid|^arity` and literal grids must stay small.

use hypercomplex::Quaternion;
use itertools::{izip, Itertools};
use num_complex::Complex64;
use tracing::warn;

use crate::domain::{Domain, Values};

const LARGE_MESH: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    pub fn new<P: Into<Vec<f64>>>(points: P) -> Self {
        Grid {
            points: points.into(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A copy of this grid with `specials` (typically ±inf and NaN) appended
    pub fn with_special_values(&self, specials: &[f64]) -> Grid {
        self.points.iter().chain(specials).copied().collect()
    }

    /// Number of mesh rows for an input built from `arity` grid axes
    pub fn rows(&self, arity: u32) -> usize {
        self.len().pow(arity)
    }
}

impl From<Vec<f64>> for Grid {
    fn from(points: Vec<f64>) -> Self {
        Grid { points }
    }
}

impl FromIterator<f64> for Grid {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Grid {
            points: iter.into_iter().collect(),
        }
    }
}

/// Flattened coordinate columns of an `N`-dimensional mesh
///
/// Rows follow "xy" mesh indexing: the first axis varies faster than the
/// second, and from the third axis on the last one varies fastest.
pub fn meshgrid<const N: usize>(axes: [&[f64]; N]) -> [Vec<f64>; N] {
    let rows: usize = axes.iter().map(|axis| axis.len()).product();
    if rows > LARGE_MESH {
        warn!(rows, dimensions = N, "building a very large mesh");
    }

    let mut columns: [Vec<f64>; N] = std::array::from_fn(|_| Vec::with_capacity(rows));
    if N == 0 {
        return columns;
    }

    let order = axis_order(N);
    let points = order
        .iter()
        .map(|&axis| axes[axis].iter().copied())
        .multi_cartesian_product();

    for point in points {
        for (&axis, value) in order.iter().zip(point) {
            columns[axis].push(value);
        }
    }

    columns
}

/// Axes from slowest to fastest varying
fn axis_order(dimensions: usize) -> Vec<usize> {
    let mut order = (0..dimensions).collect::<Vec<_>>();
    if dimensions >= 2 {
        order.swap(0, 1);
    }
    order
}

pub fn real_inputs(grid: &Grid) -> Vec<f64> {
    grid.points.clone()
}

/// Every `re + im i` with both parts drawn from the grid
pub fn complex_inputs(grid: &Grid) -> Vec<Complex64> {
    let p = grid.points();
    let [re, im] = meshgrid([p; 2]);
    re.into_iter()
        .zip(im)
        .map(|(re, im)| Complex64::new(re, im))
        .collect()
}

/// Every quaternion with all four components drawn from the grid
///
/// Mesh axes one to four are assigned to `x`, `y`, `z`, `w` in that order.
pub fn quaternion_inputs(grid: &Grid) -> Vec<Quaternion<f64>> {
    let p = grid.points();
    let [x, y, z, w] = meshgrid([p; 4]);
    izip!(w, x, y, z)
        .map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
        .collect()
}

pub fn unary_inputs(domain: Domain, grid: &Grid) -> Values {
    match domain {
        Domain::Real => real_inputs(grid).into(),
        Domain::Complex => complex_inputs(grid).into(),
        Domain::Quaternion => quaternion_inputs(grid).into(),
    }
}

/// Base and exponent columns of a power scenario
#[derive(Debug, Clone, PartialEq)]
pub struct PowerOperands {
    pub base: Values,
    pub exponent: Values,
}

pub fn real_power_operands(grid: &Grid) -> PowerOperands {
    let p = grid.points();
    let [base, exponent] = meshgrid([p; 2]);
    PowerOperands {
        base: base.into(),
        exponent: exponent.into(),
    }
}

/// Base and exponent are assembled part by part so that an infinite or NaN
/// component never leaks into its neighbour.
pub fn complex_power_operands(grid: &Grid) -> PowerOperands {
    let p = grid.points();
    let [base_re, base_im, exp_re, exp_im] = meshgrid([p; 4]);

    let mut base = Vec::with_capacity(base_re.len());
    let mut exponent = Vec::with_capacity(base_re.len());
    for (br, bi, er, ei) in izip!(base_re, base_im, exp_re, exp_im) {
        base.push(Complex64::new(br, bi));
        exponent.push(Complex64::new(er, ei));
    }

    PowerOperands {
        base: base.into(),
        exponent: exponent.into(),
    }
}

pub fn quaternion_power_operands(grid: &Grid) -> PowerOperands {
    let p = grid.points();
    let [bw, bx, by, bz, ew, ex, ey, ez] = meshgrid([p; 8]);

    let base = izip!(bw, bx, by, bz)
        .map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
        .collect::<Vec<_>>();
    let exponent = izip!(ew, ex, ey, ez)
        .map(|(w, x, y, z)| Quaternion::new(w, x, y, z))
        .collect::<Vec<_>>();

    PowerOperands {
        base: base.into(),
        exponent: exponent.into(),
    }
}

pub fn power_operands(domain: Domain, grid: &Grid) -> PowerOperands {
    match domain {
        Domain::Real => real_power_operands(grid),
        Domain::Complex => complex_power_operands(grid),
        Domain::Quaternion => quaternion_power_operands(grid),
    }
}
