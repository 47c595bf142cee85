//! Hit-counting Monte Carlo sampler.
//!
//! Each trial draws one point from the unit square and counts it as a hit
//! when it lies inside the unit circle. After the loop, the hit fraction is
//! scaled by four:
//!
//! ```text
//! area(quarter circle) / area(unit square) = (π / 4) / 1
//! π ≈ 4 × hits / trials
//! ```

use std::f64::consts::PI;

use tracing::debug;

use super::trials::TrialCount;
use crate::rng::{PiRng, PointSource};

/// Raw outcome of one sampling run.
///
/// Holds exact integer counts; the floating-point ratio is formed only in
/// [`SamplingRun::estimate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingRun {
    hits: u64,
    trials: TrialCount,
}

impl SamplingRun {
    /// Number of points that fell inside the unit circle.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of trials performed.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials.get()
    }

    /// Returns `4 × hits / trials`.
    ///
    /// Both counts are widened to `f64` before dividing. The result lies in
    /// [0, 4].
    #[inline]
    pub fn estimate(&self) -> f64 {
        4.0 * self.hits as f64 / self.trials.get() as f64
    }

    /// Absolute distance between the estimate and π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.estimate() - PI).abs()
    }
}

/// Monte Carlo π estimator.
///
/// Owns its [`PointSource`]. Production code uses [`PiRng`] through
/// [`Sampler::time_seeded`] or [`Sampler::seeded`]; tests inject a
/// deterministic source with [`Sampler::new`].
///
/// # Examples
///
/// ```rust
/// use pimc_kernel::mc::{Sampler, TrialCount};
/// use pimc_kernel::rng::{Point, ReplayPoints};
///
/// // Three hits out of every four points.
/// let source = ReplayPoints::new(vec![
///     Point::new(0.1, 0.1),
///     Point::new(0.2, 0.9),
///     Point::new(0.5, 0.5),
///     Point::new(0.9, 0.9),
/// ])
/// .unwrap();
///
/// let mut sampler = Sampler::new(source);
/// let estimate = sampler.estimate(TrialCount::new(8).unwrap());
/// assert_eq!(estimate, 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct Sampler<S> {
    source: S,
}

impl Sampler<PiRng> {
    /// Creates a sampler whose generator is seeded from the wall clock.
    pub fn time_seeded() -> Self {
        Self::new(PiRng::from_time())
    }

    /// Creates a sampler with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PiRng::from_seed(seed))
    }

    /// Seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: PointSource> Sampler<S> {
    /// Creates a sampler drawing from `source`.
    #[inline]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs `trials` trials and returns the exact hit count.
    ///
    /// The hit counter starts at zero on every call. The source is not
    /// reset, so consecutive runs see fresh points.
    pub fn run(&mut self, trials: TrialCount) -> SamplingRun {
        let mut hits: u64 = 0;
        for _ in 0..trials.get() {
            if self.source.next_point().in_unit_circle() {
                hits += 1;
            }
        }

        let run = SamplingRun { hits, trials };
        debug!(
            hits = run.hits(),
            trials = run.trials(),
            estimate = run.estimate(),
            abs_error = run.abs_error(),
            "Sampling run complete"
        );
        run
    }

    /// Runs `trials` trials and returns the π estimate.
    #[inline]
    pub fn estimate(&mut self, trials: TrialCount) -> f64 {
        self.run(trials).estimate()
    }

    /// Borrows the point source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the sampler and returns its point source.
    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }
}

/// Estimates π from `trials` points using a time-seeded generator.
///
/// Successive calls in different seconds use different seeds; calls within
/// the same second repeat the same estimate.
pub fn estimate_pi(trials: TrialCount) -> f64 {
    Sampler::time_seeded().estimate(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Point, ReplayPoints};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn trials(n: u64) -> TrialCount {
        TrialCount::new(n).unwrap()
    }

    fn replay(points: &[(f64, f64)]) -> ReplayPoints {
        ReplayPoints::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_all_hits() {
        let mut sampler = Sampler::new(replay(&[(0.0, 0.0), (0.5, 0.5)]));
        let run = sampler.run(trials(10));

        assert_eq!(run.hits(), 10);
        assert_eq!(run.estimate(), 4.0);
    }

    #[test]
    fn test_no_hits() {
        let mut sampler = Sampler::new(replay(&[(0.99, 0.99)]));
        let run = sampler.run(trials(10));

        assert_eq!(run.hits(), 0);
        assert_eq!(run.estimate(), 0.0);
    }

    #[test]
    fn test_boundary_point_counts_as_hit() {
        let mut sampler = Sampler::new(replay(&[(1.0, 0.0), (0.0, 1.0)]));
        assert_eq!(sampler.run(trials(2)).hits(), 2);
    }

    #[test]
    fn test_exact_ratio_from_injected_points() {
        // One hit in every three points: 7 trials see hits at 0, 3, 6.
        let mut sampler = Sampler::new(replay(&[(0.1, 0.2), (0.8, 0.8), (0.9, 0.7)]));
        let run = sampler.run(trials(7));

        assert_eq!(run.hits(), 3);
        assert_eq!(run.estimate(), 4.0 * 3.0 / 7.0);
    }

    #[test]
    fn test_counter_resets_between_runs() {
        let mut sampler = Sampler::new(replay(&[(0.1, 0.1)]));

        assert_eq!(sampler.run(trials(5)).hits(), 5);
        assert_eq!(sampler.run(trials(3)).hits(), 3);
    }

    #[test]
    fn test_single_trial_is_zero_or_four() {
        for seed in 0..200 {
            let estimate = Sampler::seeded(seed).estimate(TrialCount::ONE);
            assert!(
                estimate == 0.0 || estimate == 4.0,
                "seed {} gave {}",
                seed,
                estimate
            );
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = Sampler::seeded(314).run(trials(10_000));
        let b = Sampler::seeded(314).run(trials(10_000));

        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_accessor() {
        let sampler = Sampler::seeded(27);
        assert_eq!(sampler.seed(), 27);
        assert_eq!(sampler.source().seed(), 27);
        assert_eq!(sampler.into_source().seed(), 27);
    }

    #[test]
    fn test_abs_error() {
        let mut sampler = Sampler::new(replay(&[(0.1, 0.1)]));
        let run = sampler.run(trials(1));

        assert_relative_eq!(run.abs_error(), 4.0 - PI, epsilon = 1e-15);
    }

    #[test]
    fn test_estimate_pi_is_plausible() {
        let estimate = estimate_pi(trials(200_000));
        assert!((estimate - PI).abs() < 0.1, "estimate = {}", estimate);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_estimate_in_range(seed in any::<u64>(), n in 1..5_000u64) {
            let estimate = Sampler::seeded(seed).estimate(trials(n));
            prop_assert!((0.0..=4.0).contains(&estimate), "estimate {} out of range", estimate);
        }

        #[test]
        fn prop_estimate_is_exact_ratio(seed in any::<u64>(), n in 1..5_000u64) {
            let run = Sampler::seeded(seed).run(trials(n));
            prop_assert!(run.hits() <= n);
            prop_assert_eq!(run.estimate(), 4.0 * run.hits() as f64 / n as f64);
        }
    }
}
