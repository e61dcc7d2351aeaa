//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::Calendar;
use crate::error::CoreError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
///
/// The modified variants do not check for a month boundary: dataset
/// conventions named `MODFOLLOWING` and `MODPRECEDING` behave as a plain
/// roll forward and a plain roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day.
    #[serde(rename = "MODFOLLOWING")]
    ModifiedFollowing,

    /// Move to the preceding business day.
    #[serde(rename = "MODPRECEDING")]
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Returns all business day conventions.
    #[must_use]
    pub fn all() -> &'static [BusinessDayConvention] {
        &[
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::ModifiedPreceding,
        ]
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "MODFOLLOWING",
            BusinessDayConvention::ModifiedPreceding => "MODPRECEDING",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "FOLLOWING" | "F" => Ok(BusinessDayConvention::Following),
            "MODFOLLOWING" | "MODIFIEDFOLLOWING" | "MF" => {
                Ok(BusinessDayConvention::ModifiedFollowing)
            }
            "MODPRECEDING" | "MODIFIEDPRECEDING" | "MP" => {
                Ok(BusinessDayConvention::ModifiedPreceding)
            }
            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    match convention {
        BusinessDayConvention::Following | BusinessDayConvention::ModifiedFollowing => {
            following(date, calendar)
        }
        BusinessDayConvention::ModifiedPreceding => preceding(date, calendar),
    }
}

/// Returns the next business day on or after the given date.
fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

/// Returns the previous business day on or before the given date.
fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}
