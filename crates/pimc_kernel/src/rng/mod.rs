//! # Random Point Sources
//!
//! Everything the sampler draws comes through the [`PointSource`] trait.
//!
//! - [`PiRng`]: seeded wrapper around `rand::rngs::StdRng`, the production
//!   source. Seeds are either supplied or taken from the wall clock.
//! - [`ReplayPoints`]: cycles through a fixed list of points, so hit counts
//!   can be known exactly in tests.
//!
//! ## Usage Example
//!
//! ```rust
//! use pimc_kernel::rng::{PiRng, PointSource};
//!
//! let mut rng = PiRng::from_seed(12345);
//! let p = rng.next_point();
//! assert!(p.x >= 0.0 && p.x < 1.0);
//! assert!(p.y >= 0.0 && p.y < 1.0);
//! ```
//!
//! ## Seeding
//!
//! [`time_seed`] has one-second resolution. Two runs started within the same
//! second receive the same seed and therefore the same estimate; pass an
//! explicit seed when independence between runs matters.

mod point;
mod prng;

pub use point::{Point, PointSource, ReplayPoints, SourceError};
pub use prng::{time_seed, PiRng};

#[cfg(test)]
mod tests;
