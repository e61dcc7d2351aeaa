//! Yield curve dataset.

use std::io;
use std::path::Path;

use serde::Deserialize;

use yieldline_core::{CurrencyCode, Date};
use yieldline_curves::{YieldCurvePoint, YieldCurveSet};

use crate::error::{FileError, FileResult};

/// CSV record for curve points.
#[derive(Debug, Deserialize)]
struct CurvePointRecord {
    currency: String,
    observation_date: String,
    tenor: f64,
    rate: f64,
}

/// Loads a yield curve dataset from a CSV file.
pub fn load_yield_curves(path: impl AsRef<Path>) -> FileResult<YieldCurveSet> {
    let path = path.as_ref();
    let reader = crate::reader_builder()
        .from_path(path)
        .map_err(|e| FileError::read(path.display().to_string(), e))?;
    let set = read_csv(reader)?;
    log::debug!("loaded {} curve points from {}", set.len(), path.display());
    Ok(set)
}

/// Reads a yield curve dataset from any CSV source.
pub fn read_yield_curves<R: io::Read>(reader: R) -> FileResult<YieldCurveSet> {
    read_csv(crate::reader_builder().from_reader(reader))
}

fn read_csv<R: io::Read>(mut reader: csv::Reader<R>) -> FileResult<YieldCurveSet> {
    let mut set = YieldCurveSet::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row = index + 2;
        let record: CurvePointRecord = result.map_err(|e| FileError::parse(row, e))?;

        let currency = CurrencyCode::new(&record.currency)
            .map_err(|e| FileError::invalid_field(row, "currency", e))?;
        let observation_date = Date::parse(&record.observation_date)
            .map_err(|e| FileError::invalid_field(row, "observation_date", e))?;

        set.push(YieldCurvePoint::new(
            currency,
            observation_date,
            record.tenor,
            record.rate,
        ));
    }

    Ok(set)
}
