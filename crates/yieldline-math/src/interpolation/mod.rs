//! Interpolation methods.
//!
//! - [`LinearInterpolator`]: piecewise-linear interpolation, optionally held
//!   flat beyond the first and last points.

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for one-dimensional interpolators.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns true if queries outside the data range are answered.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
