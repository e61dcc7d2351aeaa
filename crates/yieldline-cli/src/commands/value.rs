//! Value command implementation.
//!
//! Prints base and scenario NPV, Macaulay duration and, given a clean
//! price, the total price and yield to maturity.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use yieldline_bonds::{value_bond, TradePrice};

use crate::commands::{find_bond, PositionArgs};
use crate::config::Session;
use crate::error::CliError;
use crate::output::{format_amount, format_percent, print_header, print_metrics, KeyValue};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// Parallel shift of the curve in percentage points
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub shift: f64,

    /// Clean price in percent of nominal
    #[arg(long)]
    pub clean_price: Option<Decimal>,

    /// Accrued interest per piece
    #[arg(long, default_value = "0")]
    pub accrued: Decimal,
}

/// Execute the value command.
pub fn execute(args: ValueArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let curves = session.curves()?;
    let terms = find_bond(&catalog, &args.position.isin)?;
    let trade = args.position.trade(args.shift)?;

    let price = match args.clean_price {
        Some(clean) if clean <= Decimal::ZERO => {
            return Err(CliError::InvalidPrice(clean.to_string()).into());
        }
        Some(clean) => Some(TradePrice::new(clean, args.accrued)),
        None => None,
    };

    info!(
        isin = %terms.isin,
        trade_date = %trade.trade_date,
        pieces = trade.signed_pieces,
        "valuing trade"
    );
    let report = value_bond(terms, &curves, &trade, price.as_ref(), &session.valuation)?;

    let currency = terms.currency;
    let mut metrics = vec![
        KeyValue::new("ISIN", terms.isin.clone()),
        KeyValue::new("Trade Date", trade.trade_date.to_string()),
        KeyValue::new("Direction", trade.direction().to_string()),
        KeyValue::new("Pieces", trade.pieces().to_string()),
        KeyValue::new(
            "NPV BASE",
            format!("{} {currency}", format_amount(report.npv_base)),
        ),
    ];

    if trade.shift_percent != 0.0 {
        metrics.push(KeyValue::new(
            format!("NPV SCENARIO (shift {:.2}%)", trade.shift_percent),
            format!("{} {currency}", format_amount(report.npv_scenario)),
        ));
    }

    metrics.push(KeyValue::new(
        "Macaulay Duration",
        format!("{:.4} years", report.macaulay_duration),
    ));

    if let Some(total) = report.target_price {
        metrics.push(KeyValue::new(
            "Total Price",
            format!("{} {currency}", format_amount(total.abs())),
        ));
    }
    if let Some(ytm) = report.yield_to_maturity {
        metrics.push(KeyValue::new("Yield to Maturity", format_percent(ytm)));
    }

    if session.decorated() {
        print_header(&format!("{} Valuation", terms.name));
    }
    print_metrics(&metrics, session.format)
}
