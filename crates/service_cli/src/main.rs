//! pimc - Monte Carlo estimation of π
//!
//! Samples points uniformly from the unit square and reports four times the
//! fraction that land inside the unit circle, together with the wall-clock
//! time the run took.
//!
//! # Usage
//!
//! - `pimc 1000000` - estimate π from one million points
//! - `pimc --seed 42 1000000` - reproducible run
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | wrong number of arguments or unknown flag |
//! | 2 | iteration count not a number, or not positive |
//! | 3 | invalid configuration |
//! | 4 | failed to write the result |

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use pimc_kernel::mc::TrialCount;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, ConfigOverrides, LogLevel};
pub use error::{CliError, Result};

/// Estimate π by Monte Carlo sampling of the unit square
#[derive(Parser, Debug)]
#[command(name = "pimc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of random points to sample (a positive integer)
    #[arg(allow_negative_numbers = true)]
    iterations: String,

    /// Fixed seed for the random generator (default: current time in seconds)
    #[arg(short, long, env = "PIMC_SEED")]
    seed: Option<u64>,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE", env = "PIMC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PIMC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Decimal places printed for the estimate and the elapsed time
    #[arg(short, long, env = "PIMC_PRECISION")]
    precision: Option<usize>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            seed: self.seed,
            precision: self.precision,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_cli() -> Result<Option<Cli>> {
    match Cli::try_parse() {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version text go to stdout.
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(CliError::Usage(err.render().to_string().trim_end().to_string())),
    }
}

fn run() -> Result<()> {
    let Some(cli) = parse_cli()? else {
        return Ok(());
    };

    let config = build_config(&cli.overrides())?;
    init_tracing(config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let trials: TrialCount = cli.iterations.parse()?;

    commands::estimate::run(trials, &config, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
