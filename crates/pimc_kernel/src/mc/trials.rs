//! Validated number of Monte Carlo trials.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use super::error::TrialCountError;

/// Number of trials in one sampling run, always at least 1.
///
/// Backed by a `u64` so runs of billions of trials are representable. The
/// only way to obtain a value is through a validating constructor.
///
/// # Examples
///
/// ```rust
/// use pimc_kernel::mc::{TrialCount, TrialCountError};
///
/// let trials: TrialCount = "1000000".parse().unwrap();
/// assert_eq!(trials.get(), 1_000_000);
///
/// assert!(matches!("0".parse::<TrialCount>(), Err(TrialCountError::NotPositive(0))));
/// assert!(matches!("ten".parse::<TrialCount>(), Err(TrialCountError::Unparsable { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialCount(NonZeroU64);

impl TrialCount {
    /// A single trial.
    pub const ONE: Self = Self(NonZeroU64::MIN);

    /// Creates a trial count.
    ///
    /// # Errors
    ///
    /// Returns [`TrialCountError::NotPositive`] when `trials` is 0.
    #[inline]
    pub fn new(trials: u64) -> Result<Self, TrialCountError> {
        NonZeroU64::new(trials)
            .map(Self)
            .ok_or(TrialCountError::NotPositive(0))
    }

    /// Returns the count.
    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for TrialCount {
    type Error = TrialCountError;

    fn try_from(trials: u64) -> Result<Self, Self::Error> {
        Self::new(trials)
    }
}

impl TryFrom<i64> for TrialCount {
    type Error = TrialCountError;

    fn try_from(trials: i64) -> Result<Self, Self::Error> {
        if trials <= 0 {
            return Err(TrialCountError::NotPositive(trials));
        }
        Self::new(trials.unsigned_abs())
    }
}

impl FromStr for TrialCount {
    type Err = TrialCountError;

    /// Parses a base-10 integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let value: i64 = input.parse().map_err(|source| TrialCountError::Unparsable {
            input: input.to_string(),
            source,
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for TrialCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
