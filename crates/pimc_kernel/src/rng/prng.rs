//! Seeded pseudo-random generator for the sampling loop.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::{Point, PointSource};

/// Returns the current UNIX time in whole seconds, for use as a seed.
///
/// Falls back to 0 when the system clock reads before the epoch.
///
/// # Granularity
///
/// Runs started within the same second get the same seed. This is weak,
/// non-cryptographic seeding and is not a source of statistical
/// independence across runs.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Uniform random generator used by the sampler.
///
/// Wraps `StdRng` and remembers the seed it was created with so that a run
/// can be reported and replayed.
///
/// # Examples
///
/// ```rust
/// use pimc_kernel::rng::PiRng;
///
/// let mut a = PiRng::from_seed(7);
/// let mut b = PiRng::from_seed(7);
/// assert_eq!(a.gen_uniform(), b.gen_uniform());
/// assert_eq!(a.seed(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct PiRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl PiRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the wall clock (see [`time_seed`]).
    pub fn from_time() -> Self {
        let seed = time_seed();
        tracing::debug!(seed, "Seeding generator from system time");
        Self::from_seed(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills the buffer with uniform values in [0, 1).
    ///
    /// Empty buffers are left untouched.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }
}

impl PointSource for PiRng {
    /// Draws x first, then y, each from [0, 1).
    #[inline]
    fn next_point(&mut self) -> Point {
        let x = self.gen_uniform();
        let y = self.gen_uniform();
        Point::new(x, y)
    }
}
