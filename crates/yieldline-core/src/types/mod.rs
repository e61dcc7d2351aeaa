//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date for schedule and accrual calculations
//! - [`CurrencyCode`]: Three-letter currency code
//! - [`CouponFrequency`]: Coupon payment frequency
//! - [`PrincipalFrequency`]: Principal repayment frequency

mod currency;
mod date;
mod frequency;

pub use currency::CurrencyCode;
pub use date::Date;
pub use frequency::{CouponFrequency, PrincipalFrequency};
