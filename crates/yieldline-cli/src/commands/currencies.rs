//! Currencies command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::config::Session;
use crate::output::{print_header, print_output};

/// Arguments for the currencies command.
#[derive(Args, Debug)]
pub struct CurrenciesArgs {}

#[derive(Debug, Serialize, Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
}

/// Execute the currencies command.
pub fn execute(_args: CurrenciesArgs, session: &Session) -> Result<()> {
    let table = session.currencies()?;

    let rows: Vec<CurrencyRow> = table
        .entries()
        .iter()
        .map(|e| CurrencyRow {
            name: e.name.clone(),
            code: e.code.to_string(),
        })
        .collect();

    if session.decorated() {
        print_header("Currencies");
    }
    print_output(&rows, session.format)
}
