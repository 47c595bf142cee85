//! Sample points and the sources that produce them.

use thiserror::Error;

/// A sampled point in the unit square.
///
/// Points are ephemeral: each trial creates one, tests it and drops it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when `x² + y² ≤ 1`.
    ///
    /// Points exactly on the circle count as hits.
    #[inline]
    pub fn in_unit_circle(&self) -> bool {
        self.x * self.x + self.y * self.y <= 1.0
    }
}

/// Anything that can hand the sampler one point per trial.
///
/// Implementations advance their internal state on every call. The sampler
/// owns its source, so no state is shared between runs unless the caller
/// moves the same source into a new sampler.
pub trait PointSource {
    /// Produces the next point.
    fn next_point(&mut self) -> Point;
}

impl<S: PointSource + ?Sized> PointSource for &mut S {
    #[inline]
    fn next_point(&mut self) -> Point {
        (**self).next_point()
    }
}

/// Error building a point source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// A replay source needs at least one point to cycle through.
    #[error("Replay source requires at least one point")]
    EmptyReplay,
}

/// Deterministic source that cycles through a fixed list of points.
///
/// With `k` points supplied, trial `i` sees point `i mod k`, which makes the
/// hit count of any run computable by hand.
///
/// # Examples
///
/// ```rust
/// use pimc_kernel::rng::{Point, PointSource, ReplayPoints};
///
/// let mut source = ReplayPoints::new(vec![Point::new(0.1, 0.1), Point::new(0.9, 0.9)]).unwrap();
/// assert!(source.next_point().in_unit_circle());
/// assert!(!source.next_point().in_unit_circle());
/// assert!(source.next_point().in_unit_circle());
/// ```
#[derive(Clone, Debug)]
pub struct ReplayPoints {
    points: Vec<Point>,
    cursor: usize,
}

impl ReplayPoints {
    /// Creates a replay source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyReplay`] when `points` is empty.
    pub fn new(points: Vec<Point>) -> Result<Self, SourceError> {
        if points.is_empty() {
            return Err(SourceError::EmptyReplay);
        }
        Ok(Self { points, cursor: 0 })
    }

    /// Number of distinct points in one cycle.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty replay cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points in one cycle that fall inside the unit circle.
    pub fn hits_per_cycle(&self) -> usize {
        self.points.iter().filter(|p| p.in_unit_circle()).count()
    }
}

impl PointSource for ReplayPoints {
    #[inline]
    fn next_point(&mut self) -> Point {
        let point = self.points[self.cursor];
        self.cursor = (self.cursor + 1) % self.points.len();
        point
    }
}
