//! Currency name dataset.
//!
//! Maps display names such as "Czech Koruna" to the codes used by the bond
//! and curve datasets.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use yieldline_core::CurrencyCode;

use crate::error::{FileError, FileResult};

#[derive(Debug, Deserialize)]
struct CurrencyRecord {
    currency_name: String,
    currency_code: String,
}

/// One named currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyEntry {
    /// Display name.
    pub name: String,
    /// Three-letter code.
    pub code: CurrencyCode,
}

/// Currency names in file order.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    entries: Vec<CurrencyEntry>,
}

impl CurrencyTable {
    /// Loads the table from a CSV file with `currency_name,currency_code`
    /// columns.
    pub fn from_path(path: impl AsRef<Path>) -> FileResult<Self> {
        let path = path.as_ref();
        let reader = crate::reader_builder()
            .from_path(path)
            .map_err(|e| FileError::read(path.display().to_string(), e))?;
        let table = Self::read_csv(reader)?;
        log::debug!("loaded {} currencies from {}", table.len(), path.display());
        Ok(table)
    }

    /// Reads the table from any CSV source.
    pub fn from_reader<R: io::Read>(reader: R) -> FileResult<Self> {
        Self::read_csv(crate::reader_builder().from_reader(reader))
    }

    fn read_csv<R: io::Read>(mut reader: csv::Reader<R>) -> FileResult<Self> {
        let mut entries = Vec::new();
        for (index, result) in reader.deserialize().enumerate() {
            let row = index + 2;
            let record: CurrencyRecord = result.map_err(|e| FileError::parse(row, e))?;
            let code = CurrencyCode::new(&record.currency_code)
                .map_err(|e| FileError::invalid_field(row, "currency_code", e))?;
            entries.push(CurrencyEntry {
                name: record.currency_name,
                code,
            });
        }
        Ok(Self { entries })
    }

    /// Returns the entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[CurrencyEntry] {
        &self.entries
    }

    /// Finds the code for a display name, ignoring case.
    #[must_use]
    pub fn code_for(&self, name: &str) -> Option<CurrencyCode> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.code)
    }

    /// Finds the display name of a code.
    #[must_use]
    pub fn name_of(&self, code: CurrencyCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.name.as_str())
    }

    /// Returns the number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
