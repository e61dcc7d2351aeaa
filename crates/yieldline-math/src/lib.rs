//! # Yieldline Math
//!
//! Numerical building blocks for the Yieldline valuation engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise-linear interpolation with flat end extrapolation
//! - **Solvers**: Root-finding algorithms (Brent, and a Newton-Raphson/Brent hybrid)
//!
//! Every solver is bounded by [`solvers::SolverConfig::max_iterations`] and
//! reports failure instead of returning an unconverged estimate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{brent, hybrid, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
