//! Static bond terms.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use yieldline_core::calendars::BusinessDayConvention;
use yieldline_core::daycounts::DayCountConvention;
use yieldline_core::{CouponFrequency, CurrencyCode, Date, PrincipalFrequency};

use crate::cashflows::{Schedule, ScheduleConfig};
use crate::error::{BondError, BondResult};

/// Terms of a fixed-rate bond.
///
/// Conventions are closed enums, so unknown strings are rejected when the
/// terms are built rather than during valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Issue name.
    pub name: String,
    /// ISIN.
    pub isin: String,
    /// Issue date; accrual of the first coupon starts here.
    pub issue_date: Date,
    /// Maturity date; the last payment date.
    pub maturity_date: Date,
    /// Nominal value of one piece.
    pub nominal_value: Decimal,
    /// Currency of the nominal.
    pub currency: CurrencyCode,
    /// Annual coupon rate in percent.
    pub coupon_rate: Decimal,
    /// Coupon frequency.
    pub coupon_frequency: CouponFrequency,
    /// Principal repayment frequency.
    pub principal_frequency: PrincipalFrequency,
    /// Day count convention for coupon accrual.
    pub day_count: DayCountConvention,
    /// Business day convention for intermediate payment dates.
    pub business_day_convention: BusinessDayConvention,
}

impl BondTerms {
    /// Checks the invariants valuation relies on.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidTerms` if the issue date is not before
    /// maturity, the coupon is negative or the nominal is not positive.
    pub fn validate(&self) -> BondResult<()> {
        if self.issue_date >= self.maturity_date {
            return Err(BondError::invalid_terms(format!(
                "{}: issue date {} is not before maturity {}",
                self.isin, self.issue_date, self.maturity_date
            )));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(BondError::invalid_terms(format!(
                "{}: coupon rate {} is negative",
                self.isin, self.coupon_rate
            )));
        }
        if self.nominal_value <= Decimal::ZERO {
            return Err(BondError::invalid_terms(format!(
                "{}: nominal value {} is not positive",
                self.isin, self.nominal_value
            )));
        }
        Ok(())
    }

    /// Returns the nominal value as `f64`.
    pub fn nominal_f64(&self) -> BondResult<f64> {
        self.nominal_value.to_f64().ok_or_else(|| {
            BondError::invalid_terms(format!(
                "{}: nominal value {} is out of range",
                self.isin, self.nominal_value
            ))
        })
    }

    /// Returns the coupon rate in percent as `f64`.
    pub fn coupon_rate_f64(&self) -> BondResult<f64> {
        self.coupon_rate.to_f64().ok_or_else(|| {
            BondError::invalid_terms(format!(
                "{}: coupon rate {} is out of range",
                self.isin, self.coupon_rate
            ))
        })
    }

    /// Returns the schedule configuration for these terms.
    #[must_use]
    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::new(self.issue_date, self.maturity_date, self.coupon_frequency)
            .with_business_day_convention(self.business_day_convention)
    }

    /// Generates the payment schedule.
    pub fn schedule(&self) -> BondResult<Schedule> {
        Schedule::generate(self.schedule_config())
    }
}
