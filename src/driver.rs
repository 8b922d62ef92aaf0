use std::path::PathBuf;

use strum::{Display, EnumIter};
use tracing::{info, info_span};

use crate::config::GeneratorConfig;
use crate::dispatch::{dispatch, ResultSet};
use crate::domain::Domain;
use crate::error::Result;
use crate::flatten::flatten;
use crate::grid::{power_operands, unary_inputs};
use crate::power;
use crate::writer::write_csv;

/// What a generated file exercises
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumIter, Display)]
pub enum Scenario {
    /// Unary functions
    #[strum(serialize = "basic")]
    Unary,
    /// The power operator
    #[strum(serialize = "pow")]
    Power,
}

/// `<prefix><scenario>_<domain>.csv`
pub fn output_path(prefix: &str, scenario: Scenario, domain: Domain) -> PathBuf {
    PathBuf::from(format!("{prefix}{scenario}_{domain}.csv"))
}

/// One written file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub scenario: Scenario,
    pub domain: Domain,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Unary results for one domain
    pub fn unary(&self, domain: Domain) -> Result<ResultSet> {
        let input = unary_inputs(domain, &self.config.unary_grid);
        dispatch(input, &self.config.functions)
    }

    /// Power results for every configured power domain
    pub fn power(&self) -> impl Iterator<Item = (Domain, Result<ResultSet>)> + '_ {
        self.config.power.iter().map(|scenario| {
            let operands = power_operands(scenario.domain, &scenario.grid);
            (scenario.domain, power::evaluate(operands))
        })
    }

    /// Writes every scenario file, stopping at the first failure
    pub fn run(&self, prefix: &str) -> Result<Vec<Output>> {
        let mut outputs = Vec::new();

        for &domain in &self.config.unary_domains {
            let results = self.unary(domain)?;
            outputs.push(write(prefix, Scenario::Unary, domain, &results)?);
        }

        for (domain, results) in self.power() {
            outputs.push(write(prefix, Scenario::Power, domain, &results?)?);
        }

        Ok(outputs)
    }
}

fn write(prefix: &str, scenario: Scenario, domain: Domain, results: &ResultSet) -> Result<Output> {
    let _span = info_span!("scenario", %scenario, %domain).entered();

    let path = output_path(prefix, scenario, domain);
    let records = flatten(results);
    let rows = write_csv(&path, &records)?;
    info!(path = %path.display(), rows, "wrote test vectors");

    Ok(Output {
        scenario,
        domain,
        path,
        rows,
    })
}

/// Runs `config` and writes its files under `prefix`
pub fn generate(prefix: &str, config: GeneratorConfig) -> Result<Vec<Output>> {
    Generator::new(config).run(prefix)
}
