//! Root-finding algorithms.
//!
//! - [`brent`]: bracketing method, guaranteed to converge on a sign change
//! - [`hybrid`]: Newton-Raphson on an analytic derivative with a Brent fallback
//!
//! All solvers stop after [`SolverConfig::max_iterations`] and return
//! [`MathError::ConvergenceFailed`](crate::error::MathError::ConvergenceFailed)
//! rather than an unconverged estimate.
//!
//! # Example: Flat Yield
//!
//! ```rust
//! use yieldline_math::solvers::{hybrid, SolverConfig};
//!
//! // Yield in percent that prices 5 annual 5.0 coupons + 100 to 95
//! let price = |y: f64| {
//!     let df = 1.0 + y / 100.0;
//!     (1..=5).map(|t| 5.0 / df.powi(t)).sum::<f64>() + 100.0 / df.powi(5) - 95.0
//! };
//! let d_price = |y: f64| {
//!     let df = 1.0 + y / 100.0;
//!     let mut d = 0.0;
//!     for t in 1..=5 {
//!         d -= f64::from(t) * 5.0 / df.powi(t + 1) / 100.0;
//!     }
//!     d - 5.0 * 100.0 / df.powi(6) / 100.0
//! };
//!
//! let result = hybrid(price, d_price, 5.0, Some((0.0, 20.0)), &SolverConfig::default()).unwrap();
//! assert!(result.root > 5.0);
//! ```

mod brent;
mod hybrid;

pub use brent::brent;
pub use hybrid::hybrid;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}
