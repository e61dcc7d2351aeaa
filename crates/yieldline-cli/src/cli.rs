//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{
    BondsArgs, CashflowsArgs, CurrenciesArgs, CurveArgs, ScenariosArgs, ScheduleArgs, ValueArgs,
};

/// Yieldline - fixed-rate bond valuation against zero-rate curves
#[derive(Parser)]
#[command(name = "yieldline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log dataset loading and valuation steps to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "YIELDLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bond emission dataset (CSV)
    #[arg(long, global = true, env = "YIELDLINE_BONDS")]
    pub bonds: Option<PathBuf>,

    /// Yield curve dataset (CSV)
    #[arg(long, global = true, env = "YIELDLINE_CURVES")]
    pub curves: Option<PathBuf>,

    /// Currency name dataset (CSV)
    #[arg(long, global = true, env = "YIELDLINE_CURRENCIES")]
    pub currencies: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the fixed-rate bonds in the emission dataset
    Bonds(BondsArgs),

    /// List the currency names the curve command accepts
    Currencies(CurrenciesArgs),

    /// Show a yield curve, or the rate at one tenor
    Curve(CurveArgs),

    /// Show the payment schedule of a bond
    Schedule(ScheduleArgs),

    /// Project and discount the cash flows of a trade
    Cashflows(CashflowsArgs),

    /// Value a trade: NPV, duration and yield to maturity
    Value(ValueArgs),

    /// NPV and duration across a ladder of parallel shifts
    Scenarios(ScenariosArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Returns true for JSON and CSV.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Csv)
    }
}
