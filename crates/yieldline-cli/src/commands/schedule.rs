//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::commands::find_bond;
use crate::config::Session;
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// ISIN or issue name of the bond
    #[arg(short, long)]
    pub isin: String,
}

/// One payment date.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Accrual Start")]
    accrual_start: String,
    #[tabled(rename = "Payment Date")]
    payment_date: String,
    #[tabled(rename = "Unadjusted")]
    unadjusted: String,
    #[tabled(rename = "Days")]
    accrual_days: i64,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let terms = find_bond(&catalog, &args.isin)?;
    let schedule = terms.schedule()?;

    let rows: Vec<ScheduleRow> = schedule
        .periods()
        .zip(schedule.unadjusted_dates())
        .enumerate()
        .map(|(i, ((start, payment), unadjusted))| ScheduleRow {
            index: i + 1,
            accrual_start: start.to_string(),
            payment_date: payment.to_string(),
            unadjusted: unadjusted.to_string(),
            accrual_days: terms.day_count.accrual_days(start, payment),
        })
        .collect();

    if session.decorated() {
        print_header(&format!(
            "{} ({}, {}, {})",
            terms.name, terms.coupon_frequency, terms.business_day_convention, terms.day_count
        ));
    }
    print_output(&rows, session.format)
}
