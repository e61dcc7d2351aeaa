//! Parallel-shift scenario ladders.
//!
//! With the `parallel` feature the shifts are valued on the rayon pool.
//! Results always come back in ladder order.

use serde::{Deserialize, Serialize};

use yieldline_curves::{YieldCurveSet, ZeroRateCurve};

use crate::cashflows::CashFlowGenerator;
use crate::error::{BondError, BondResult};
use crate::pricing::metrics::{duration_of, present_value};
use crate::types::{BondTerms, TradeContext};

/// Most shifts a ladder built by [`ShiftLadder::range`] may hold.
const MAX_LADDER_LEN: usize = 10_000;

/// Valuation under one shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Shift in percentage points.
    pub shift_percent: f64,
    /// Net present value.
    pub npv: f64,
    /// Macaulay duration in years, absent when undefined.
    pub macaulay_duration: Option<f64>,
}

/// An ordered list of parallel shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLadder {
    shifts: Vec<f64>,
}

impl ShiftLadder {
    /// Creates a ladder from explicit shifts.
    #[must_use]
    pub fn new(shifts: Vec<f64>) -> Self {
        Self { shifts }
    }

    /// Creates the ladder `from, from + step, ...` up to and including `to`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidConfig` unless all inputs are finite,
    /// `step > 0` and `from <= to`.
    pub fn range(from: f64, to: f64, step: f64) -> BondResult<Self> {
        if !(from.is_finite() && to.is_finite() && step.is_finite()) {
            return Err(BondError::invalid_config("shift range must be finite"));
        }
        if step <= 0.0 {
            return Err(BondError::invalid_config(format!(
                "shift step {step} must be positive"
            )));
        }
        if from > to {
            return Err(BondError::invalid_config(format!(
                "shift range start {from} is after end {to}"
            )));
        }

        let steps = ((to - from) / step + 1e-9).floor() as usize;
        if steps >= MAX_LADDER_LEN {
            return Err(BondError::invalid_config(format!(
                "shift range yields more than {MAX_LADDER_LEN} scenarios"
            )));
        }

        let shifts = (0..=steps).map(|i| from + i as f64 * step).collect();
        Ok(Self { shifts })
    }

    /// Returns the shifts in order.
    #[must_use]
    pub fn shifts(&self) -> &[f64] {
        &self.shifts
    }

    /// Returns the number of shifts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the ladder has no shifts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Values the position under every shift.
    ///
    /// The curve is selected once. Each shift replaces the trade's own shift.
    pub fn evaluate(
        &self,
        terms: &BondTerms,
        curves: &YieldCurveSet,
        trade: &TradeContext,
    ) -> BondResult<Vec<ScenarioResult>> {
        let curve = curves.curve(terms.currency, trade.trade_date)?;
        self.evaluate_on(terms, &curve, trade)
    }

    /// Values the position under every shift on an already selected curve.
    #[cfg(feature = "parallel")]
    pub fn evaluate_on(
        &self,
        terms: &BondTerms,
        curve: &ZeroRateCurve,
        trade: &TradeContext,
    ) -> BondResult<Vec<ScenarioResult>> {
        use rayon::prelude::*;

        self.shifts
            .par_iter()
            .map(|&shift| evaluate_shift(terms, curve, trade, shift))
            .collect()
    }

    /// Values the position under every shift on an already selected curve.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_on(
        &self,
        terms: &BondTerms,
        curve: &ZeroRateCurve,
        trade: &TradeContext,
    ) -> BondResult<Vec<ScenarioResult>> {
        self.shifts
            .iter()
            .map(|&shift| evaluate_shift(terms, curve, trade, shift))
            .collect()
    }
}

fn evaluate_shift(
    terms: &BondTerms,
    curve: &ZeroRateCurve,
    trade: &TradeContext,
    shift_percent: f64,
) -> BondResult<ScenarioResult> {
    let records = CashFlowGenerator::generate(terms, curve, &trade.with_shift(shift_percent))?;
    Ok(ScenarioResult {
        shift_percent,
        npv: present_value(&records),
        macaulay_duration: duration_of(&records).ok(),
    })
}
