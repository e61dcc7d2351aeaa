//! One-call valuation of a priced trade.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use yieldline_curves::YieldCurveSet;

use crate::cashflows::{CashFlowGenerator, CashFlowRecord};
use crate::config::ValuationConfig;
use crate::error::{BondError, BondResult};
use crate::pricing::metrics::{duration_of, present_value, solve_yield};
use crate::types::{BondTerms, TradeContext, TradePrice};

/// Full valuation of a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// ISIN of the valued bond.
    pub isin: String,
    /// Trade inputs, including the scenario shift.
    pub trade: TradeContext,
    /// Cash flows under the scenario shift.
    pub cash_flows: Vec<CashFlowRecord>,
    /// NPV with no shift.
    pub npv_base: f64,
    /// NPV under the scenario shift.
    pub npv_scenario: f64,
    /// Macaulay duration under the scenario shift, in years.
    pub macaulay_duration: f64,
    /// Signed total price matched by the yield search.
    pub target_price: Option<f64>,
    /// Yield to maturity in percent, when a price was supplied.
    pub yield_to_maturity: Option<f64>,
}

/// Values a trade: base and shifted NPV, duration and, given a price, yield.
///
/// The yield target is `price.total_price` signed by the trade direction.
///
/// # Errors
///
/// Propagates any cash flow, duration or yield failure.
pub fn value_bond(
    terms: &BondTerms,
    curves: &YieldCurveSet,
    trade: &TradeContext,
    price: Option<&TradePrice>,
    config: &ValuationConfig,
) -> BondResult<ValuationReport> {
    let curve = curves.curve(terms.currency, trade.trade_date)?;

    let base_flows = CashFlowGenerator::generate(terms, &curve, &trade.with_shift(0.0))?;
    let cash_flows = CashFlowGenerator::generate(terms, &curve, trade)?;
    let macaulay_duration = duration_of(&cash_flows)?;

    let target_price = match price {
        Some(price) => {
            let total = price.total_price(trade.pieces(), terms.nominal_value);
            let total = total.to_f64().ok_or_else(|| {
                BondError::invalid_terms(format!("total price {total} is out of range"))
            })?;
            Some(total * trade.direction().sign() as f64)
        }
        None => None,
    };

    let yield_to_maturity = match target_price {
        Some(target) => Some(solve_yield(
            &cash_flows,
            target,
            trade.shift_percent,
            config,
        )?),
        None => None,
    };

    Ok(ValuationReport {
        isin: terms.isin.clone(),
        trade: *trade,
        npv_base: present_value(&base_flows),
        npv_scenario: present_value(&cash_flows),
        cash_flows,
        macaulay_duration,
        target_price,
        yield_to_maturity,
    })
}
