//! Bonds command implementation.
//!
//! Lists the fixed-rate bonds of the emission dataset.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use yieldline_bonds::BondTerms;

use crate::config::Session;
use crate::output::{print_header, print_info, print_output};

/// Arguments for the bonds command.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Only list bonds in this currency
    #[arg(long)]
    pub currency: Option<String>,
}

/// One bond in the listing.
#[derive(Debug, Serialize, Tabled)]
struct BondRow {
    #[tabled(rename = "Issue Name")]
    name: String,
    #[tabled(rename = "ISIN")]
    isin: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Nominal")]
    nominal: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Coupon (%)")]
    coupon: String,
    #[tabled(rename = "Coupon Freq")]
    coupon_frequency: String,
    #[tabled(rename = "Principal")]
    principal_frequency: String,
}

impl From<&BondTerms> for BondRow {
    fn from(terms: &BondTerms) -> Self {
        Self {
            name: terms.name.clone(),
            isin: terms.isin.clone(),
            maturity: terms.maturity_date.to_string(),
            nominal: terms.nominal_value.to_string(),
            currency: terms.currency.to_string(),
            coupon: terms.coupon_rate.to_string(),
            coupon_frequency: terms.coupon_frequency.to_string(),
            principal_frequency: terms.principal_frequency.to_string(),
        }
    }
}

/// Execute the bonds command.
pub fn execute(args: BondsArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let currency = args
        .currency
        .as_deref()
        .map(super::parse_currency)
        .transpose()?;

    let rows: Vec<BondRow> = catalog
        .iter()
        .filter(|b| currency.map_or(true, |c| b.currency == c))
        .map(BondRow::from)
        .collect();

    if session.decorated() {
        print_header("Fixed-Rate Bonds");
    }
    print_output(&rows, session.format)?;

    if session.decorated() && catalog.skipped_floating() > 0 {
        print_info(&format!(
            "{} floating-rate bonds skipped",
            catalog.skipped_floating()
        ));
    }
    Ok(())
}
