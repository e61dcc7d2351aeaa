//! Curve command implementation.
//!
//! Displays the tenor/rate pillars of one observed curve, or the
//! interpolated rate at a single tenor.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::commands::{parse_currency, parse_date};
use crate::config::Session;
use crate::output::{format_percent, print_header, print_metrics, print_output, KeyValue};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Currency code or name of the curve
    #[arg(short, long)]
    pub currency: String,

    /// Observation date (YYYY-MM-DD). Lists available dates when omitted.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Tenor in years to interpolate at
    #[arg(short, long)]
    pub tenor: Option<f64>,
}

/// One curve pillar.
#[derive(Debug, Serialize, Tabled)]
struct PillarRow {
    #[tabled(rename = "Tenor (Y)")]
    tenor: f64,
    #[tabled(rename = "Rate (%)")]
    rate: f64,
}

/// One available observation date.
#[derive(Debug, Serialize, Tabled)]
struct DateRow {
    #[tabled(rename = "Observation Date")]
    observation_date: String,
    #[tabled(rename = "Pillars")]
    pillars: usize,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, session: &Session) -> Result<()> {
    let curves = session.curves()?;
    let currency = match parse_currency(&args.currency) {
        Ok(code) => code,
        Err(err) => session.currencies()?.code_for(&args.currency).ok_or(err)?,
    };

    let Some(date) = args.date.as_deref() else {
        let rows: Vec<DateRow> = curves
            .observation_dates(currency)
            .into_iter()
            .map(|d| DateRow {
                observation_date: d.to_string(),
                pillars: curves.select(currency, d).len(),
            })
            .collect();
        if session.decorated() {
            print_header(&format!("{currency} Curve Dates"));
        }
        return print_output(&rows, session.format);
    };

    let date = parse_date(date)?;
    let curve = curves.curve(currency, date)?;

    if let Some(tenor) = args.tenor {
        let rate = curve.rate_at(tenor)?;
        let metrics = vec![
            KeyValue::new("Currency", currency.to_string()),
            KeyValue::new("Observation Date", date.to_string()),
            KeyValue::new("Tenor (Y)", format!("{tenor}")),
            KeyValue::new("Rate", format_percent(rate)),
        ];
        if session.decorated() {
            print_header("Interpolated Rate");
        }
        return print_metrics(&metrics, session.format);
    }

    let rows: Vec<PillarRow> = curve
        .pillars()
        .map(|(tenor, rate)| PillarRow { tenor, rate })
        .collect();
    if session.decorated() {
        print_header(&format!("{currency} Curve {date}"));
    }
    print_output(&rows, session.format)
}
