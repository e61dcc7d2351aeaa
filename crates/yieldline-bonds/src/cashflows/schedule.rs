//! Payment schedule generation.
//!
//! Dates are stepped forward from the issue date by the coupon period. Each
//! intermediate date is rolled onto a business day; the maturity date itself
//! is always paid unadjusted.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::cashflows::{Schedule, ScheduleConfig};
//! use yieldline_core::calendars::BusinessDayConvention;
//! use yieldline_core::{CouponFrequency, Date};
//!
//! let config = ScheduleConfig::new(
//!     Date::from_ymd(2024, 1, 15).unwrap(),
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     CouponFrequency::SemiAnnual,
//! )
//! .with_business_day_convention(BusinessDayConvention::Following);
//!
//! let schedule = Schedule::generate(config).unwrap();
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.dates().last(), Some(&Date::from_ymd(2026, 1, 15).unwrap()));
//! ```

use serde::{Deserialize, Serialize};

use yieldline_core::calendars::{adjust, BusinessDayConvention, WeekendCalendar};
use yieldline_core::{CouponFrequency, Date};

use crate::error::{BondError, BondResult};

/// Configuration for schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Issue date; the first accrual period starts here.
    pub start_date: Date,
    /// Maturity date; always the last payment date.
    pub end_date: Date,
    /// Coupon frequency.
    pub frequency: CouponFrequency,
    /// Business day adjustment for intermediate dates.
    pub business_day_convention: BusinessDayConvention,
}

impl ScheduleConfig {
    /// Creates a new schedule configuration rolling with `Following`.
    #[must_use]
    pub fn new(start_date: Date, end_date: Date, frequency: CouponFrequency) -> Self {
        Self {
            start_date,
            end_date,
            frequency,
            business_day_convention: BusinessDayConvention::Following,
        }
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_business_day_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.business_day_convention = convention;
        self
    }
}

/// An ordered list of payment dates, issue date excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    issue_date: Date,
    unadjusted_dates: Vec<Date>,
    dates: Vec<Date>,
    convention: BusinessDayConvention,
}

impl Schedule {
    /// Generates a schedule from the given configuration.
    ///
    /// Stepping always continues from the unadjusted date, so a roll never
    /// shifts later dates. Adjusted dates that land after maturity are
    /// dropped, and maturity is appended unless the last adjusted date
    /// already equals it. Both date lists always end at maturity.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` unless the end date is after the
    /// start date.
    pub fn generate(config: ScheduleConfig) -> BondResult<Self> {
        if config.end_date <= config.start_date {
            return Err(BondError::InvalidSchedule {
                message: format!(
                    "maturity {} must be after issue {}",
                    config.end_date, config.start_date
                ),
            });
        }

        let months_per_period = config.frequency.months_per_period() as i32;
        let mut unadjusted_dates = Vec::new();
        let mut dates = Vec::new();

        let mut current = config.start_date;
        loop {
            let next = current.add_months(months_per_period)?;
            if next >= config.end_date {
                break;
            }
            let rolled = adjust(next, config.business_day_convention, &WeekendCalendar);
            if rolled <= config.end_date {
                unadjusted_dates.push(next);
                dates.push(rolled);
            }
            current = next;
        }

        if dates.last() == Some(&config.end_date) {
            // a roll onto maturity stands for the maturity payment itself
            if let Some(last) = unadjusted_dates.last_mut() {
                *last = config.end_date;
            }
        } else {
            unadjusted_dates.push(config.end_date);
            dates.push(config.end_date);
        }

        Ok(Self {
            issue_date: config.start_date,
            unadjusted_dates,
            dates,
            convention: config.business_day_convention,
        })
    }

    /// Returns the issue date the schedule was generated from.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the adjusted payment dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the payment dates before business day adjustment.
    #[must_use]
    pub fn unadjusted_dates(&self) -> &[Date] {
        &self.unadjusted_dates
    }

    /// Returns the business day convention used.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the number of payment dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false; maturity is always scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns accrual periods `(start, payment)`.
    ///
    /// The first period starts at the issue date, every later one at the
    /// preceding adjusted payment date.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        std::iter::once(self.issue_date)
            .chain(self.dates.iter().copied())
            .zip(self.dates.iter().copied())
    }
}

/// Generates the payment dates for a bond.
///
/// Shorthand for [`Schedule::generate`] returning only the adjusted dates.
pub fn generate_schedule(
    issue_date: Date,
    maturity_date: Date,
    frequency: CouponFrequency,
    convention: BusinessDayConvention,
) -> BondResult<Vec<Date>> {
    let config = ScheduleConfig::new(issue_date, maturity_date, frequency)
        .with_business_day_convention(convention);
    Ok(Schedule::generate(config)?.dates)
}
