//! Error types for trial-count validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Rejection of a requested number of trials.
///
/// Parse failures and non-positive values are separate variants so callers
/// can report them differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialCountError {
    /// The text is not a base-10 integer in the `i64` range.
    #[error("Invalid iteration count '{input}': {source}")]
    Unparsable {
        /// The rejected text, trimmed.
        input: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The value parsed but is zero or negative.
    #[error("Number of iterations should not be less than 1 (got {0})")]
    NotPositive(i64),
}
