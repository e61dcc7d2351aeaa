//! Coupon and principal payment frequencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Payment frequency for coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CouponFrequency {
    /// Annual payments (1 per year)
    #[default]
    Annual,
    /// Semi-annual payments (2 per year)
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
}

impl CouponFrequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CouponFrequency::Annual => 1,
            CouponFrequency::SemiAnnual => 2,
            CouponFrequency::Quarterly => 4,
            CouponFrequency::Monthly => 12,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            CouponFrequency::Annual => 12,
            CouponFrequency::SemiAnnual => 6,
            CouponFrequency::Quarterly => 3,
            CouponFrequency::Monthly => 1,
        }
    }

    /// Returns all coupon frequencies.
    #[must_use]
    pub fn all() -> &'static [CouponFrequency] {
        &[
            CouponFrequency::Annual,
            CouponFrequency::SemiAnnual,
            CouponFrequency::Quarterly,
            CouponFrequency::Monthly,
        ]
    }
}

impl fmt::Display for CouponFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CouponFrequency::Annual => "Annual",
            CouponFrequency::SemiAnnual => "Semi-Annual",
            CouponFrequency::Quarterly => "Quarterly",
            CouponFrequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CouponFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ANNUAL" => Ok(CouponFrequency::Annual),
            "SEMIANNUAL" => Ok(CouponFrequency::SemiAnnual),
            "QUARTERLY" => Ok(CouponFrequency::Quarterly),
            "MONTHLY" => Ok(CouponFrequency::Monthly),
            _ => Err(CoreError::unsupported_frequency(s)),
        }
    }
}

/// Principal repayment frequency.
///
/// `AtMaturity` is a bullet bond. Every other variant amortizes the principal
/// in equal slices over the payment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrincipalFrequency {
    /// Equal annual repayments
    Annual,
    /// Equal semi-annual repayments
    #[serde(rename = "Semi-Annual")]
    SemiAnnual,
    /// Equal quarterly repayments
    Quarterly,
    /// Equal monthly repayments
    Monthly,
    /// Full repayment at maturity
    #[default]
    #[serde(rename = "At Maturity")]
    AtMaturity,
}

impl PrincipalFrequency {
    /// Returns true if principal is repaid before maturity.
    #[must_use]
    pub fn is_amortizing(&self) -> bool {
        !matches!(self, PrincipalFrequency::AtMaturity)
    }
}

impl fmt::Display for PrincipalFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrincipalFrequency::Annual => "Annual",
            PrincipalFrequency::SemiAnnual => "Semi-Annual",
            PrincipalFrequency::Quarterly => "Quarterly",
            PrincipalFrequency::Monthly => "Monthly",
            PrincipalFrequency::AtMaturity => "At Maturity",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PrincipalFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ANNUAL" => Ok(PrincipalFrequency::Annual),
            "SEMIANNUAL" => Ok(PrincipalFrequency::SemiAnnual),
            "QUARTERLY" => Ok(PrincipalFrequency::Quarterly),
            "MONTHLY" => Ok(PrincipalFrequency::Monthly),
            "ATMATURITY" | "BULLET" => Ok(PrincipalFrequency::AtMaturity),
            _ => Err(CoreError::unsupported_frequency(s)),
        }
    }
}

/// Uppercases and drops separators so "Semi-Annual", "semi annual" and
/// "SemiAnnual" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
