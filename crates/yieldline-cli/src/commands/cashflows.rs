//! Cashflows command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use yieldline_bonds::{compute_cash_flows, CashFlowRecord};

use crate::commands::{find_bond, PositionArgs};
use crate::config::Session;
use crate::output::{format_amount, print_header, print_info, print_output, print_records};

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Parallel shift of the curve in percentage points
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub shift: f64,
}

/// One projected cash flow.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Payment Date")]
    pub payment_date: String,
    #[tabled(rename = "Coupon")]
    pub coupon: String,
    #[tabled(rename = "Principal")]
    pub principal: String,
    #[tabled(rename = "Days")]
    pub accrual_days: i64,
    #[tabled(rename = "Cum. Days")]
    pub cumulative_days: i64,
    #[tabled(rename = "Outstanding")]
    pub remaining_principal: String,
    #[tabled(rename = "Rate (%)")]
    pub discount_rate: String,
    #[tabled(rename = "PV Coupon")]
    pub discounted_coupon: String,
    #[tabled(rename = "PV Principal")]
    pub discounted_principal: String,
}

impl From<&CashFlowRecord> for CashFlowRow {
    fn from(r: &CashFlowRecord) -> Self {
        Self {
            payment_date: r.payment_date.to_string(),
            coupon: format_amount(r.coupon),
            principal: format_amount(r.principal),
            accrual_days: r.accrual_days,
            cumulative_days: r.cumulative_days,
            remaining_principal: format_amount(r.remaining_principal),
            discount_rate: format!("{:.4}", r.discount_rate),
            discounted_coupon: format_amount(r.discounted_coupon),
            discounted_principal: format_amount(r.discounted_principal),
        }
    }
}

/// Execute the cashflows command.
pub fn execute(args: CashflowsArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let curves = session.curves()?;
    let terms = find_bond(&catalog, &args.position.isin)?;
    let trade = args.position.trade(args.shift)?;
    info!(
        isin = %terms.isin,
        trade_date = %trade.trade_date,
        shift = trade.shift_percent,
        "projecting cash flows"
    );

    let records = compute_cash_flows(terms, &curves, &trade)?;

    if session.format.is_machine_readable() {
        return print_records(&records, session.format);
    }

    let rows: Vec<CashFlowRow> = records.iter().map(CashFlowRow::from).collect();
    if session.decorated() {
        print_header(&format!("{} Cash Flows", terms.name));
    }
    print_output(&rows, session.format)?;

    if session.decorated() {
        let total: f64 = records.iter().map(CashFlowRecord::discounted_total).sum();
        print_info(&format!("NPV: {} {}", format_amount(total), terms.currency));
    }
    Ok(())
}
