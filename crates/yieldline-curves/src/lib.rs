//! # Yieldline Curves
//!
//! Yield curve datasets and tenor interpolation.
//!
//! A [`YieldCurveSet`] holds raw `(currency, observation date, tenor, rate)`
//! rows for any number of currencies and dates. Selecting one
//! `(currency, date)` pair yields a [`ZeroRateCurve`], which answers
//! [`ZeroRateCurve::rate_at`] by linear interpolation between tenors and holds
//! the boundary rates flat beyond the first and last tenor.
//!
//! Rates are in percent and tenors in years throughout.
//!
//! ## Quick Start
//!
//! ```rust
//! use yieldline_core::{CurrencyCode, Date};
//! use yieldline_curves::{YieldCurvePoint, YieldCurveSet};
//!
//! let czk = CurrencyCode::new("CZK").unwrap();
//! let date = Date::from_ymd(2024, 11, 24).unwrap();
//!
//! let set: YieldCurveSet = [(1.0, 2.0), (3.0, 2.5), (5.0, 3.0)]
//!     .into_iter()
//!     .map(|(tenor, rate)| YieldCurvePoint::new(czk, date, tenor, rate))
//!     .collect();
//!
//! let curve = set.curve(czk, date).unwrap();
//! assert_eq!(curve.rate_at(0.5).unwrap(), 2.0);
//! assert_eq!(curve.rate_at(4.0).unwrap(), 2.75);
//! assert_eq!(curve.rate_at(10.0).unwrap(), 3.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod curve;
pub mod error;
pub mod point;

pub use curve::ZeroRateCurve;
pub use error::{CurveError, CurveResult};
pub use point::{YieldCurvePoint, YieldCurveSet};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::ZeroRateCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::point::{YieldCurvePoint, YieldCurveSet};
}
