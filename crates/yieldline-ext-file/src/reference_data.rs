//! Bond emission dataset.

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use yieldline_bonds::BondTerms;
use yieldline_core::{CoreError, CurrencyCode, Date};

use crate::error::{FileError, FileResult};

// =============================================================================
// CSV RECORD
// =============================================================================

/// One row of the bond emission dataset.
#[derive(Debug, Deserialize)]
struct BondRecord {
    #[serde(rename = "Issue Name")]
    name: String,
    #[serde(rename = "ISIN")]
    isin: String,
    #[serde(rename = "Maturity Date")]
    maturity_date: String,
    #[serde(rename = "Nominal Value (1 unit)")]
    nominal_value: String,
    #[serde(rename = "Nominal Value Currency")]
    currency: String,
    #[serde(rename = "Fixed Rate/Spread [%]")]
    coupon_rate: String,
    #[serde(rename = "Issue Date")]
    issue_date: String,
    #[serde(rename = "Business Day Convention")]
    business_day_convention: String,
    #[serde(rename = "Day Count Convention")]
    day_count: String,
    #[serde(rename = "Principal Payment Frequency")]
    principal_frequency: String,
    #[serde(rename = "Coupon Frequency")]
    coupon_frequency: String,
    #[serde(rename = "Reference Rate Code", default)]
    reference_rate_code: Option<String>,
}

impl BondRecord {
    fn is_floating(&self) -> bool {
        self.reference_rate_code
            .as_deref()
            .is_some_and(|code| !code.trim().is_empty())
    }

    fn into_terms(self, row: usize) -> FileResult<BondTerms> {
        let terms = BondTerms {
            issue_date: field(row, "Issue Date", Date::parse(&self.issue_date))?,
            maturity_date: field(row, "Maturity Date", Date::parse(&self.maturity_date))?,
            nominal_value: number(row, "Nominal Value (1 unit)", &self.nominal_value)?,
            currency: field(row, "Nominal Value Currency", CurrencyCode::new(&self.currency))?,
            coupon_rate: number(row, "Fixed Rate/Spread [%]", &self.coupon_rate)?,
            coupon_frequency: field(row, "Coupon Frequency", self.coupon_frequency.parse())?,
            principal_frequency: field(
                row,
                "Principal Payment Frequency",
                self.principal_frequency.parse(),
            )?,
            day_count: field(row, "Day Count Convention", self.day_count.parse())?,
            business_day_convention: field(
                row,
                "Business Day Convention",
                self.business_day_convention.parse(),
            )?,
            name: self.name.trim().to_string(),
            isin: self.isin.trim().to_string(),
        };

        terms
            .validate()
            .map_err(|source| FileError::InvalidTerms { row, source })?;
        Ok(terms)
    }
}

fn field<T>(row: usize, column: &'static str, parsed: Result<T, CoreError>) -> FileResult<T> {
    parsed.map_err(|source| FileError::invalid_field(row, column, source))
}

fn number(row: usize, column: &'static str, value: &str) -> FileResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| FileError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

// =============================================================================
// BOND CATALOG
// =============================================================================

/// The fixed-rate bonds of an emission dataset, in file order.
///
/// Floating-rate rows (non-empty `Reference Rate Code`) are skipped.
#[derive(Debug, Clone, Default)]
pub struct BondCatalog {
    bonds: Vec<BondTerms>,
    by_isin: HashMap<String, usize>,
    skipped_floating: usize,
}

impl BondCatalog {
    /// Loads a catalog from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        let reader = crate::reader_builder()
            .from_path(path)
            .map_err(|e| FileError::read(path.display().to_string(), e))?;
        let catalog = Self::from_csv(reader)?;
        log::debug!(
            "loaded {} fixed-rate bonds from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads a catalog from any CSV source.
    pub fn from_reader<R: io::Read>(reader: R) -> FileResult<Self> {
        Self::from_csv(crate::reader_builder().from_reader(reader))
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> FileResult<Self> {
        let mut catalog = Self::default();

        for (index, result) in reader.deserialize().enumerate() {
            let row = index + 2;
            let record: BondRecord = result.map_err(|e| FileError::parse(row, e))?;

            if record.is_floating() {
                log::debug!("row {row}: skipping floating-rate bond {}", record.isin.trim());
                catalog.skipped_floating += 1;
                continue;
            }

            catalog.push(record.into_terms(row)?);
        }

        Ok(catalog)
    }

    /// Creates a catalog from already built terms.
    #[must_use]
    pub fn from_bonds(bonds: Vec<BondTerms>) -> Self {
        let mut catalog = Self::default();
        for terms in bonds {
            catalog.push(terms);
        }
        catalog
    }

    fn push(&mut self, terms: BondTerms) {
        if self.by_isin.contains_key(&terms.isin) {
            log::warn!("duplicate ISIN {}; keeping the first row", terms.isin);
            return;
        }
        self.by_isin.insert(terms.isin.clone(), self.bonds.len());
        self.bonds.push(terms);
    }

    /// Returns the bonds in file order.
    #[must_use]
    pub fn bonds(&self) -> &[BondTerms] {
        &self.bonds
    }

    /// Looks up a bond by ISIN.
    #[must_use]
    pub fn by_isin(&self, isin: &str) -> Option<&BondTerms> {
        self.by_isin.get(isin.trim()).map(|&i| &self.bonds[i])
    }

    /// Looks up the first bond with the given issue name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&BondTerms> {
        let name = name.trim();
        self.bonds.iter().find(|b| b.name == name)
    }

    /// Looks up a bond by ISIN, falling back to the issue name.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&BondTerms> {
        self.by_isin(key).or_else(|| self.by_name(key))
    }

    /// Returns the number of fixed-rate bonds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true if no fixed-rate bond was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Returns how many floating-rate rows were skipped.
    #[must_use]
    pub fn skipped_floating(&self) -> usize {
        self.skipped_floating
    }

    /// Iterates over the bonds in file order.
    pub fn iter(&self) -> impl Iterator<Item = &BondTerms> {
        self.bonds.iter()
    }
}
