use std::error::Error as _;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gmath_testgen::{generate, Variant};

/// Writes CSV test vectors for real, complex and quaternion math
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Prepended to every output file name, may include a directory
    #[arg(default_value = "tests_")]
    prefix: String,

    /// Grid and function preset
    #[arg(long, value_enum, default_value_t = Variant::default())]
    variant: Variant,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gmath_testgen=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();

    if let Err(err) = generate(&args.prefix, args.variant.config()) {
        let mut chain = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push_str(": ");
            chain.push_str(&cause.to_string());
            source = cause.source();
        }
        error!(variant = %args.variant, "{chain}");
        std::process::exit(1);
    }
}
