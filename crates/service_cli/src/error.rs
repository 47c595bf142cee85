//! Error types for the pimc CLI.
//!
//! Every error is terminal: it is printed once to stderr and mapped to the
//! process exit code by [`CliError::exit_code`].

use pimc_kernel::TrialCountError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments or an unknown flag (message rendered by clap)
    #[error("{0}")]
    Usage(String),

    /// Iteration count not a number, or not positive
    #[error("{0}")]
    IterationCount(#[from] TrialCountError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure writing the result
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::IterationCount(_) => 2,
            Self::Config(_) => 3,
            Self::Io(_) => 4,
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
