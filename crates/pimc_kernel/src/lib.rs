//! # pimc_kernel: Monte Carlo estimation of π
//!
//! Draws points uniformly from the unit square and counts how many land
//! inside the inscribed quarter of the unit circle. The fraction of hits
//! approaches π/4, so four times that fraction estimates π.
//!
//! ```text
//! Sampler<S: PointSource>
//! ├── PointSource   (PiRng in production, ReplayPoints in tests)
//! ├── TrialCount    (validated, always ≥ 1)
//! └── run()         → SamplingRun { hits, trials } → estimate()
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use pimc_kernel::mc::{Sampler, TrialCount};
//!
//! let trials: TrialCount = "100000".parse().unwrap();
//! let mut sampler = Sampler::seeded(42);
//! let pi = sampler.estimate(trials);
//! assert!((0.0..=4.0).contains(&pi));
//! ```
//!
//! ## Validation Boundary
//!
//! The sampling loop never checks its input. A [`mc::TrialCount`] can only be
//! built from a positive value, so the final division is always defined and
//! every rejection happens where the count is parsed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

// Random sources and the point type
pub mod rng;

// Sampling loop and trial-count validation
pub mod mc;

pub use mc::{estimate_pi, Sampler, SamplingRun, TrialCount, TrialCountError};
pub use rng::{PiRng, Point, PointSource, ReplayPoints};
