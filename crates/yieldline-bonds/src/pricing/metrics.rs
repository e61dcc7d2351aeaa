//! Valuation metrics: NPV, Macaulay duration and yield to maturity.

use yieldline_curves::YieldCurveSet;
use yieldline_math::solvers::hybrid;

use crate::cashflows::{compute_cash_flows, CashFlowRecord};
use crate::config::ValuationConfig;
use crate::error::{BondError, BondResult};
use crate::types::{BondTerms, TradeContext};

/// Net present value of a position.
///
/// Zero when no payment remains on or after the trade date.
pub fn npv(terms: &BondTerms, curves: &YieldCurveSet, trade: &TradeContext) -> BondResult<f64> {
    let records = compute_cash_flows(terms, curves, trade)?;
    Ok(present_value(&records))
}

/// Macaulay duration of a position, in years.
///
/// # Errors
///
/// Returns `BondError::DegenerateValuation` if no cash flow remains or the
/// flows discount to zero.
pub fn macaulay_duration(
    terms: &BondTerms,
    curves: &YieldCurveSet,
    trade: &TradeContext,
) -> BondResult<f64> {
    let records = compute_cash_flows(terms, curves, trade)?;
    duration_of(&records)
}

/// Yield to maturity in percent that reprices the position at `target_price`.
///
/// Cash flows are those of [`compute_cash_flows`]; the curve only fixes which
/// dates are retained and how large each flow is. Each flow is discounted as
/// `(1 + (y + shift) / 100) ^ -t`. The target carries the position's sign, so
/// a sell is matched against a negative price.
///
/// # Errors
///
/// Returns `BondError::YtmNotConverged` if no cash flow remains or neither
/// Newton-Raphson nor Brent's method converge.
pub fn yield_to_maturity(
    terms: &BondTerms,
    curves: &YieldCurveSet,
    trade: &TradeContext,
    target_price: f64,
    config: &ValuationConfig,
) -> BondResult<f64> {
    let records = compute_cash_flows(terms, curves, trade)?;
    solve_yield(&records, target_price, trade.shift_percent, config)
}

/// Sums the discounted coupon and principal of each record.
#[must_use]
pub fn present_value(records: &[CashFlowRecord]) -> f64 {
    records.iter().map(CashFlowRecord::discounted_total).sum()
}

/// Present-value weighted average time to payment.
pub fn duration_of(records: &[CashFlowRecord]) -> BondResult<f64> {
    if records.is_empty() {
        return Err(BondError::degenerate(
            "no cash flows remain on or after the trade date",
        ));
    }

    let (weighted, total) = records.iter().fold((0.0, 0.0), |(weighted, total), r| {
        let pv = r.discounted_total();
        (weighted + r.time_to_payment() * pv, total + pv)
    });

    if total == 0.0 || !total.is_finite() {
        return Err(BondError::degenerate(format!(
            "present value {total} cannot weight a duration"
        )));
    }

    Ok(weighted / total)
}

/// Solves for the yield that prices `records` at `target_price`.
pub fn solve_yield(
    records: &[CashFlowRecord],
    target_price: f64,
    shift_percent: f64,
    config: &ValuationConfig,
) -> BondResult<f64> {
    let not_converged = |iterations| BondError::YtmNotConverged {
        target_price,
        iterations,
    };

    if records.is_empty() || !target_price.is_finite() {
        return Err(not_converged(0));
    }

    let flows: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (r.total(), r.time_to_payment()))
        .collect();

    let objective = |y: f64| {
        let base = 1.0 + (y + shift_percent) / 100.0;
        flows
            .iter()
            .map(|&(amount, t)| amount * base.powf(-t))
            .sum::<f64>()
            - target_price
    };

    let derivative = |y: f64| {
        let base = 1.0 + (y + shift_percent) / 100.0;
        flows
            .iter()
            .map(|&(amount, t)| -t / 100.0 * amount * base.powf(-t - 1.0))
            .sum::<f64>()
    };

    let (lo, hi) = config.ytm_bracket;
    let bounds = (lo - shift_percent, hi - shift_percent);

    hybrid(
        objective,
        derivative,
        config.ytm_initial_guess,
        Some(bounds),
        &config.solver_config(),
    )
    .map(|result| result.root)
    .map_err(|_| not_converged(config.ytm_max_iterations))
}
