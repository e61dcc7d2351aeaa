//! Error types for bond valuation.
//!
//! Every error is terminal for the call that raised it. Core and curve
//! failures are wrapped unchanged so the caller still sees the offending
//! convention name or the missing `(currency, date)` pair.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Bond terms break an invariant (issue before maturity, non-negative
    /// coupon, positive nominal).
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// Schedule generation was asked for an empty interval.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the problem.
        message: String,
    },

    /// A metric is undefined for the given cash flows.
    #[error("Degenerate valuation: {reason}")]
    DegenerateValuation {
        /// Why the metric cannot be computed.
        reason: String,
    },

    /// The yield search did not converge.
    #[error("Yield to maturity did not converge for target price {target_price} after {iterations} iterations")]
    YtmNotConverged {
        /// The price the search tried to match.
        target_price: f64,
        /// Iteration budget that was exhausted.
        iterations: u32,
    },

    /// A trade direction other than buy or sell.
    #[error("Unsupported trade direction: {name}. Use buy or sell.")]
    UnsupportedDirection {
        /// The direction as given.
        name: String,
    },

    /// Valuation configuration is unusable.
    #[error("Invalid valuation config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Core library error.
    #[error(transparent)]
    Core(#[from] yieldline_core::CoreError),

    /// Curve error.
    #[error(transparent)]
    Curve(#[from] yieldline_curves::CurveError),
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate valuation error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateValuation {
            reason: reason.into(),
        }
    }

    /// Creates an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
