//! # Yieldline Core
//!
//! Core types and conventions for the Yieldline fixed-rate bond valuation engine.
//!
//! This crate provides the foundational building blocks used by the other crates:
//!
//! - **Types**: `Date`, `CurrencyCode`, coupon and principal frequencies
//! - **Day Count Conventions**: ACT/360, ACT/365 and 30/360 accrual day counting
//! - **Business Day Conventions**: weekend-only rolling of payment dates
//!
//! Every convention family is a closed enum. Strings coming from datasets are
//! parsed once through `FromStr`, and anything unknown is rejected with
//! [`CoreError::UnsupportedConvention`] or [`CoreError::UnsupportedFrequency`].
//!
//! ## Example
//!
//! ```rust
//! use yieldline_core::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//! let end = Date::from_ymd(2024, 2, 28).unwrap();
//!
//! let convention: DayCountConvention = "30/360".parse().unwrap();
//! assert_eq!(convention.accrual_days(start, end), 28);
//! assert_eq!(convention.basis(), 360);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, WeekendCalendar};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CouponFrequency, CurrencyCode, Date, PrincipalFrequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CouponFrequency, CurrencyCode, Date, PrincipalFrequency};
