//! Error types for curve operations.

use thiserror::Error;
use yieldline_core::{CurrencyCode, Date};
use yieldline_math::MathError;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No curve points exist for the requested currency and observation date.
    #[error("No yield curve data for {currency} on {date}")]
    NoCurveData {
        /// Requested currency.
        currency: CurrencyCode,
        /// Requested observation date.
        date: Date,
    },

    /// Two points of one curve share a tenor but quote different rates.
    #[error("Conflicting rates for tenor {tenor} in {currency} curve on {date}")]
    DuplicateTenor {
        /// The repeated tenor in years.
        tenor: f64,
        /// Curve currency.
        currency: CurrencyCode,
        /// Curve observation date.
        date: Date,
    },

    /// A point with a negative or non-finite tenor, or a non-finite rate.
    #[error("Invalid curve point: {reason}")]
    InvalidPoint {
        /// Description of the problem.
        reason: String,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates a no-curve-data error.
    #[must_use]
    pub fn no_curve_data(currency: CurrencyCode, date: Date) -> Self {
        Self::NoCurveData { currency, date }
    }

    /// Creates an invalid point error.
    #[must_use]
    pub fn invalid_point(reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::InterpolationError {
            reason: err.to_string(),
        }
    }
}
