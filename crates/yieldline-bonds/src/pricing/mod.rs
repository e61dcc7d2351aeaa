//! Bond valuation.
//!
//! This module provides:
//! - [`npv`], [`macaulay_duration`], [`yield_to_maturity`]: metrics for one trade
//! - [`ShiftLadder`]: NPV and duration over a range of parallel shifts
//! - [`value_bond`]: everything at once as a [`ValuationReport`]

mod metrics;
mod report;
mod scenarios;

pub use metrics::{
    duration_of, macaulay_duration, npv, present_value, solve_yield, yield_to_maturity,
};
pub use report::{value_bond, ValuationReport};
pub use scenarios::{ScenarioResult, ShiftLadder};
