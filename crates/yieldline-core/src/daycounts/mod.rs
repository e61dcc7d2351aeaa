//! Day count conventions for accrual calculations.
//!
//! A day count convention turns a date interval into a number of accrual
//! days and supplies the year basis those days are divided by.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360, calendar days over a 360-day year
//! - [`Act365`]: Actual/365, calendar days over a 365-day year
//! - [`Thirty360`]: 30/360, 30-day months over a 360-day year
//!
//! # Usage
//!
//! ```rust
//! use yieldline_core::daycounts::{DayCount, Thirty360};
//! use yieldline_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 1, 15).unwrap();
//!
//! assert_eq!(Thirty360.day_count(start, end), 360);
//! ```

mod act360;
mod act365;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365;
pub use thirty360::Thirty360;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations are stateless and must be thread-safe (`Send + Sync`).
/// Behaviour for `end < start` is not part of the contract.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g., "ACT/360").
    fn name(&self) -> &'static str;

    /// Returns the number of accrual days between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Returns the year basis the accrual days are divided by.
    fn basis(&self) -> u32;

    /// Calculates the year fraction between two dates.
    #[allow(clippy::cast_precision_loss)]
    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / f64::from(self.basis())
    }
}

/// Enumeration of all supported day count conventions.
///
/// # Example
///
/// ```rust
/// use yieldline_core::daycounts::DayCountConvention;
/// use yieldline_core::types::Date;
///
/// let convention: DayCountConvention = "ACT/365".parse().unwrap();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
///
/// assert_eq!(convention.accrual_days(start, end), 181);
/// assert_eq!(convention.basis(), 365);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360
    #[serde(rename = "ACT/360")]
    Act360,

    /// 30/360 with day 31 capped to 30 on both dates
    #[serde(rename = "30/360")]
    Thirty360,

    /// Actual/365
    #[serde(rename = "ACT/365")]
    Act365,
}

impl DayCountConvention {
    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::Thirty360 => Thirty360.name(),
            DayCountConvention::Act365 => Act365.name(),
        }
    }

    /// Returns the accrual days between two ordered dates.
    #[must_use]
    pub fn accrual_days(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act360 => Act360.day_count(start, end),
            DayCountConvention::Thirty360 => Thirty360.day_count(start, end),
            DayCountConvention::Act365 => Act365.day_count(start, end),
        }
    }

    /// Returns the year-fraction divisor: 360 for ACT/360 and 30/360, 365 for ACT/365.
    #[must_use]
    pub fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Act360 => Act360.basis(),
            DayCountConvention::Thirty360 => Thirty360.basis(),
            DayCountConvention::Act365 => Act365.basis(),
        }
    }

    /// Returns the accrual fraction of a year between two ordered dates.
    ///
    /// This is the coupon fraction; discounting time uses its own basis.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Thirty360 => Thirty360.year_fraction(start, end),
            DayCountConvention::Act365 => Act365.year_fraction(start, end),
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Thirty360,
            DayCountConvention::Act365,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "A/360" => Ok(DayCountConvention::Act360),
            "30/360" | "THIRTY/360" => Ok(DayCountConvention::Thirty360),
            "ACT/365" | "ACTUAL/365" | "A/365" | "ACT/365F" => Ok(DayCountConvention::Act365),
            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conventions() {
        assert_eq!(
            "ACT/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "act/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365
        );
    }

    #[test]
    fn test_unsupported_convention() {
        let err = "ACT/ACT".parse::<DayCountConvention>().unwrap_err();
        assert_eq!(err, CoreError::unsupported_convention("ACT/ACT"));
    }

    #[test]
    fn test_basis() {
        assert_eq!(DayCountConvention::Act360.basis(), 360);
        assert_eq!(DayCountConvention::Thirty360.basis(), 360);
        assert_eq!(DayCountConvention::Act365.basis(), 365);
    }

    #[test]
    fn test_year_fraction() {
        let start = Date::from_ymd(2024, 1, 15).unwrap();
        let end = Date::from_ymd(2024, 7, 15).unwrap();

        assert_eq!(DayCountConvention::Thirty360.year_fraction(start, end), 0.5);
        // 182 actual days in the 2024 leap year half
        assert_eq!(
            DayCountConvention::Act365.year_fraction(start, end),
            182.0 / 365.0
        );
    }

    #[test]
    fn test_year_fraction_uses_basis() {
        let start = Date::from_ymd(2024, 3, 31).unwrap();
        let end = Date::from_ymd(2024, 9, 30).unwrap();
        for convention in DayCountConvention::all() {
            let expected =
                convention.accrual_days(start, end) as f64 / f64::from(convention.basis());
            assert_eq!(convention.year_fraction(start, end), expected);
        }
    }

    #[test]
    fn test_display_round_trips() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.to_string().parse().unwrap();
            assert_eq!(parsed, *convention);
        }
    }
}
