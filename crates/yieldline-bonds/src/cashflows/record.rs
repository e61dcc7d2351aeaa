//! One projected payment and its discounted value.

use serde::{Deserialize, Serialize};

use yieldline_core::Date;

/// Day basis used to turn cumulative accrual days into discounting time.
///
/// Fixed regardless of the bond's own day count convention.
pub const DISCOUNT_DAY_BASIS: f64 = 360.0;

/// A projected cash flow with its discounting inputs.
///
/// All amounts are signed: negative for a sell position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRecord {
    /// Payment date.
    pub payment_date: Date,
    /// Coupon amount.
    pub coupon: f64,
    /// Principal repaid on this date.
    pub principal: f64,
    /// Days in the accrual period ending on this date.
    pub accrual_days: i64,
    /// Accrual days summed over retained records up to this one.
    pub cumulative_days: i64,
    /// Principal still outstanding after this payment.
    pub remaining_principal: f64,
    /// Discount rate in percent, shift included.
    pub discount_rate: f64,
    /// Present value of the coupon.
    pub discounted_coupon: f64,
    /// Present value of the principal.
    pub discounted_principal: f64,
}

impl CashFlowRecord {
    /// Returns the discounting time in years.
    #[must_use]
    pub fn time_to_payment(&self) -> f64 {
        self.cumulative_days as f64 / DISCOUNT_DAY_BASIS
    }

    /// Returns coupon plus principal.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.coupon + self.principal
    }

    /// Returns the present value of coupon plus principal.
    #[must_use]
    pub fn discounted_total(&self) -> f64 {
        self.discounted_coupon + self.discounted_principal
    }
}
