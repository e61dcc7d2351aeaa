//! # Yieldline Bonds
//!
//! Fixed-rate bond valuation for the Yieldline engine.
//!
//! This crate provides:
//!
//! - **Terms**: [`BondTerms`] with validated conventions, and trade inputs
//! - **Schedules**: forward-stepped payment dates with weekend rolling
//! - **Cash Flows**: coupon, principal and discounted amounts per payment date
//! - **Metrics**: NPV, Macaulay duration and yield to maturity
//! - **Scenarios**: parallel-shift ladders, optionally on rayon
//!
//! Valuation is pure: every call recomputes its cash flows from the terms,
//! the curve set and the trade, and nothing is cached.
//!
//! ## Example
//!
//! ```rust
//! use yieldline_bonds::prelude::*;
//! use yieldline_core::prelude::*;
//! use yieldline_curves::{YieldCurvePoint, YieldCurveSet};
//! use rust_decimal_macros::dec;
//!
//! let czk = CurrencyCode::new("CZK").unwrap();
//! let trade_date = Date::from_ymd(2024, 11, 24).unwrap();
//!
//! let terms = BondTerms {
//!     name: "CZGB 3.00/33".to_string(),
//!     isin: "CZ0001005037".to_string(),
//!     issue_date: Date::from_ymd(2022, 1, 15).unwrap(),
//!     maturity_date: Date::from_ymd(2033, 1, 15).unwrap(),
//!     nominal_value: dec!(1000),
//!     currency: czk,
//!     coupon_rate: dec!(3),
//!     coupon_frequency: CouponFrequency::Annual,
//!     principal_frequency: PrincipalFrequency::AtMaturity,
//!     day_count: DayCountConvention::Thirty360,
//!     business_day_convention: BusinessDayConvention::Following,
//! };
//!
//! let curves: YieldCurveSet = [(1.0, 2.0), (3.0, 2.5), (5.0, 3.0)]
//!     .into_iter()
//!     .map(|(tenor, rate)| YieldCurvePoint::new(czk, trade_date, tenor, rate))
//!     .collect();
//!
//! let trade = TradeContext::new(trade_date, TradeDirection::Buy, 1, 0.0);
//! let value = npv(&terms, &curves, &trade).unwrap();
//! let duration = macaulay_duration(&terms, &curves, &trade).unwrap();
//! assert!(value > 900.0 && value < 1010.0);
//! assert!(duration < 8.2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod pricing;
pub mod types;

pub use cashflows::{compute_cash_flows, generate_schedule, CashFlowRecord};
pub use config::ValuationConfig;
pub use error::{BondError, BondResult};
pub use pricing::{
    macaulay_duration, npv, value_bond, yield_to_maturity, ScenarioResult, ShiftLadder,
    ValuationReport,
};
pub use types::{BondTerms, TradeContext, TradeDirection, TradePrice};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{
        compute_cash_flows, generate_schedule, CashFlowGenerator, CashFlowRecord, Schedule,
        ScheduleConfig,
    };
    pub use crate::config::ValuationConfig;
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        macaulay_duration, npv, value_bond, yield_to_maturity, ScenarioResult, ShiftLadder,
        ValuationReport,
    };
    pub use crate::types::{BondTerms, TradeContext, TradeDirection, TradePrice};
}
