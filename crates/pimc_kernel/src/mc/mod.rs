//! Monte Carlo sampling loop.
//!
//! [`Sampler`] runs the hit-counting trials; [`TrialCount`] is the validated
//! number of trials it accepts.
//!
//! # Examples
//!
//! ```rust
//! use pimc_kernel::mc::{Sampler, TrialCount};
//!
//! let trials = TrialCount::new(1_000_000).unwrap();
//! let run = Sampler::seeded(42).run(trials);
//!
//! assert_eq!(run.trials(), 1_000_000);
//! assert!((run.estimate() - std::f64::consts::PI).abs() < 0.1);
//! ```

mod error;
mod sampler;
mod trials;

pub use error::TrialCountError;
pub use sampler::{estimate_pi, Sampler, SamplingRun};
pub use trials::TrialCount;
