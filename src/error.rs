use std::path::PathBuf;

use crate::domain::Domain;
use crate::function::UnaryFn;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{function}` has no {domain} implementation")]
    Unsupported { function: UnaryFn, domain: Domain },
    #[error("column `{name}` has {found} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("power operands differ in domain (base is {base}, exponent is {exponent})")]
    DomainMismatch { base: Domain, exponent: Domain },
    #[error("ragged record set: column `{column}` has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("failed to write records")]
    Write(#[source] std::io::Error),
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
