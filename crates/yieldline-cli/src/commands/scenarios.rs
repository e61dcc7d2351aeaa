//! Scenarios command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use yieldline_bonds::ShiftLadder;

use crate::commands::{find_bond, PositionArgs};
use crate::config::Session;
use crate::output::{format_amount, print_header, print_output, print_records, print_warning};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub position: PositionArgs,

    /// First shift in percentage points
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    pub from: f64,

    /// Last shift in percentage points
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    pub to: f64,

    /// Distance between shifts
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,
}

#[derive(Debug, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Shift (%)")]
    shift: String,
    #[tabled(rename = "NPV")]
    npv: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let curves = session.curves()?;
    let terms = find_bond(&catalog, &args.position.isin)?;
    let trade = args.position.trade(0.0)?;

    let ladder = ShiftLadder::range(args.from, args.to, args.step)?;
    info!(isin = %terms.isin, shifts = ladder.len(), "evaluating shift ladder");
    let results = ladder.evaluate(terms, &curves, &trade)?;

    if session.format.is_machine_readable() {
        return print_records(&results, session.format);
    }

    let rows: Vec<ScenarioRow> = results
        .iter()
        .map(|r| ScenarioRow {
            shift: format!("{:+.2}", r.shift_percent),
            npv: format_amount(r.npv),
            duration: r
                .macaulay_duration
                .map_or_else(|| "-".to_string(), |d| format!("{d:.4}")),
        })
        .collect();

    if session.decorated() {
        print_header(&format!("{} Shift Scenarios ({})", terms.name, terms.currency));
    }
    print_output(&rows, session.format)?;

    if !session.quiet && results.iter().any(|r| r.macaulay_duration.is_none()) {
        print_warning("Duration is undefined where the present value is zero.");
    }
    Ok(())
}
