//! Generator presets
//!
//! Both presets run the same pipeline and differ only in their grids and
//! function lists.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::domain::Domain;
use crate::function::UnaryFn;
use crate::grid::Grid;

const INF: f64 = f64::INFINITY;
const NAN: f64 = f64::NAN;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, EnumIter, Display, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Dense grid, every function on every domain, no quaternion power
    Basic,
    /// Coarser grids with `arg` and `conjugate`, including quaternion power
    #[default]
    Gmath,
}

impl Variant {
    pub fn config(self) -> GeneratorConfig {
        match self {
            Variant::Basic => GeneratorConfig::basic(),
            Variant::Gmath => GeneratorConfig::gmath(),
        }
    }
}

/// Power scenario over one domain
#[derive(Debug, Clone, PartialEq)]
pub struct PowerScenario {
    pub domain: Domain,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Grid for the unary scenario of every domain
    pub unary_grid: Grid,
    /// Functions evaluated in the unary scenario, in column order
    pub functions: Vec<UnaryFn>,
    pub unary_domains: Vec<Domain>,
    pub power: Vec<PowerScenario>,
}

impl GeneratorConfig {
    pub fn basic() -> Self {
        use UnaryFn::*;

        let grid = Grid::new(vec![-5., -3., -2., -1., -0.25, 0., 0.25, 1., 2., 3., 5.]);
        let pow_grid = grid.with_special_values(&[-INF, INF, NAN]);

        GeneratorConfig {
            functions: vec![
                Abs, Arccos, Arcsin, Arctan, Cos, Sin, Tan, Arccosh, Arcsinh, Arctanh, Cosh, Sinh,
                Tanh, Exp, Log, Sqrt, Cbrt,
            ],
            unary_grid: grid,
            unary_domains: Domain::iter().collect(),
            power: vec![
                PowerScenario {
                    domain: Domain::Real,
                    grid: pow_grid.clone(),
                },
                PowerScenario {
                    domain: Domain::Complex,
                    grid: pow_grid,
                },
            ],
        }
    }

    pub fn gmath() -> Self {
        use UnaryFn::*;

        let mut functions = vec![Abs, Exp, Log, Sqrt, Cbrt, Arg, Conjugate];
        functions.extend(UnaryFn::TRIGONOMETRIC);

        let pow_grid = Grid::new(vec![-2., -1., 0., 1., 2.]).with_special_values(&[-INF, INF, NAN]);

        GeneratorConfig {
            unary_grid: Grid::new(vec![-2., -1., -0.25, 0., 0.25, 1., 2.]),
            functions,
            unary_domains: Domain::iter().collect(),
            power: vec![
                PowerScenario {
                    domain: Domain::Real,
                    grid: pow_grid.clone(),
                },
                PowerScenario {
                    domain: Domain::Complex,
                    grid: pow_grid,
                },
                PowerScenario {
                    domain: Domain::Quaternion,
                    grid: Grid::new(vec![-1., 0., 2.]).with_special_values(&[INF, NAN]),
                },
            ],
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}
