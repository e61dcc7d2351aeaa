//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// Connects consecutive points with straight lines. With flat extrapolation
/// enabled, queries below the first point return the first value and queries
/// above the last point return the last value.
///
/// A single point is accepted and behaves as a constant.
///
/// # Example
///
/// ```rust
/// use yieldline_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 3.0, 5.0], vec![2.0, 2.5, 3.0])
///     .unwrap()
///     .with_flat_extrapolation();
///
/// assert_eq!(interp.interpolate(0.5).unwrap(), 2.0);
/// assert_eq!(interp.interpolate(4.0).unwrap(), 2.75);
/// assert_eq!(interp.interpolate(10.0).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    flat_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points, if lengths differ, or if the
    /// x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.is_empty() {
            return Err(MathError::insufficient_data(1, 0));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            flat_extrapolation: false,
        })
    }

    /// Holds the boundary values constant outside the data range.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.flat_extrapolation = true;
        self
    }

    /// Returns the number of data points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no data points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|t| t.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if x.is_nan() {
            return Err(MathError::invalid_input("cannot interpolate at NaN"));
        }

        let last = self.xs.len() - 1;
        if x < self.xs[0] || x > self.xs[last] {
            if !self.flat_extrapolation {
                return Err(MathError::ExtrapolationNotAllowed {
                    x,
                    min: self.xs[0],
                    max: self.xs[last],
                });
            }
            return Ok(if x < self.xs[0] {
                self.ys[0]
            } else {
                self.ys[last]
            });
        }

        if last == 0 {
            return Ok(self.ys[0]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn allows_extrapolation(&self) -> bool {
        self.flat_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> LinearInterpolator {
        LinearInterpolator::new(vec![1.0, 3.0, 5.0], vec![2.0, 2.5, 3.0])
            .unwrap()
            .with_flat_extrapolation()
    }

    #[test]
    fn test_interpolates_between_points() {
        let interp = curve();
        assert_relative_eq!(interp.interpolate(4.0).unwrap(), 2.75, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_hits_nodes_exactly() {
        let interp = curve();
        assert_eq!(interp.interpolate(1.0).unwrap(), 2.0);
        assert_eq!(interp.interpolate(3.0).unwrap(), 2.5);
        assert_eq!(interp.interpolate(5.0).unwrap(), 3.0);
    }

    #[test]
    fn test_flat_ends() {
        let interp = curve();
        assert_eq!(interp.interpolate(0.5).unwrap(), 2.0);
        assert_eq!(interp.interpolate(0.0).unwrap(), 2.0);
        assert_eq!(interp.interpolate(10.0).unwrap(), 3.0);
        assert_eq!(interp.interpolate(100.0).unwrap(), 3.0);
    }

    #[test]
    fn test_no_extrapolation_by_default() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            interp.interpolate(2.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(!interp.allows_extrapolation());
    }

    #[test]
    fn test_single_point_is_constant() {
        let interp = LinearInterpolator::new(vec![2.0], vec![1.5])
            .unwrap()
            .with_flat_extrapolation();
        assert_eq!(interp.interpolate(0.1).unwrap(), 1.5);
        assert_eq!(interp.interpolate(2.0).unwrap(), 1.5);
        assert_eq!(interp.interpolate(30.0).unwrap(), 1.5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(LinearInterpolator::new(vec![], vec![]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 2.0], vec![1.0]).is_err());
        assert!(LinearInterpolator::new(vec![1.0, 1.0], vec![1.0, 2.0]).is_err());
        assert!(LinearInterpolator::new(vec![2.0, 1.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_nan_query() {
        assert!(curve().interpolate(f64::NAN).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stays_within_node_range(
                rates in proptest::collection::vec(-5.0f64..15.0, 1..8),
                x in -10.0f64..60.0,
            ) {
                let xs: Vec<f64> = (0..rates.len()).map(|i| 0.5 + 2.0 * i as f64).collect();
                let lo = rates.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

                let interp = LinearInterpolator::new(xs, rates)
                    .unwrap()
                    .with_flat_extrapolation();
                let y = interp.interpolate(x).unwrap();

                prop_assert!(y >= lo - 1e-12 && y <= hi + 1e-12);
            }
        }
    }
}
