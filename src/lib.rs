//! Reference test vectors for real, complex and quaternion math
//!
//! Every scenario evaluates a fixed set of functions over the cartesian
//! product of a small grid of points, then writes the inputs and outputs as
//! one CSV file per domain. Downstream math libraries replay those files to
//! check their own implementations.
//!
//! Scenarios:
//! - [x] Unary functions (`basic_<domain>.csv`)
//!     - [x] abs, arg, conjugate
//!     - [x] exp, log, sqrt, cbrt
//!     - [x] Trigonometric and hyperbolic functions and their inverses
//! - [x] Power operator (`pow_<domain>.csv`)
//!
//! Domains:
//! - [x] Real
//! - [x] Complex
//! - [x] Quaternion (abs, exp, log, sqrt, cbrt, arg, conjugate, pow)

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod driver;
pub mod error;
pub mod flatten;
pub mod function;
pub mod grid;
pub mod inverse;
pub mod naming;
pub mod power;
pub mod writer;

pub use config::{GeneratorConfig, Variant};
pub use dispatch::ResultSet;
pub use domain::{Domain, Values};
pub use driver::{generate, Generator, Output, Scenario};
pub use error::{Error, Result};
pub use function::UnaryFn;
pub use grid::Grid;
