//! # Yieldline Ext File
//!
//! CSV loaders for the datasets the Yieldline engine values against:
//!
//! - the bond emission dataset, loaded into a [`BondCatalog`] of fixed-rate
//!   [`BondTerms`](yieldline_bonds::BondTerms)
//! - the yield curve dataset, loaded into a
//!   [`YieldCurveSet`](yieldline_curves::YieldCurveSet)
//! - the currency name dataset, loaded into a [`CurrencyTable`]
//!
//! Fields are trimmed before parsing. Every convention string goes through
//! the core `FromStr` impls, so a dataset with an unknown convention fails
//! to load instead of failing later during valuation.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod currencies;
mod error;
mod market_data;
mod reference_data;

pub use currencies::{CurrencyEntry, CurrencyTable};
pub use error::{FileError, FileResult};
pub use market_data::{load_yield_curves, read_yield_curves};
pub use reference_data::BondCatalog;

use std::path::Path;

use yieldline_curves::YieldCurveSet;

/// Loads both datasets.
pub fn load_datasets(
    bonds_csv: impl AsRef<Path>,
    curves_csv: impl AsRef<Path>,
) -> FileResult<(BondCatalog, YieldCurveSet)> {
    Ok((
        BondCatalog::from_path(bonds_csv)?,
        load_yield_curves(curves_csv)?,
    ))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}
