//! Loads datasets from disk and values a bond against them.

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use yieldline_bonds::{npv, TradeContext, TradeDirection};
use yieldline_core::{CurrencyCode, Date};
use yieldline_ext_file::{load_datasets, load_yield_curves, BondCatalog, CurrencyTable, FileError};

const BONDS: &str = "\
Issue Name,ISIN,Maturity Date,Nominal Value (1 unit),Nominal Value Currency,Fixed Rate/Spread [%],Issue Date,Business Day Convention,Day Count Convention,Principal Payment Frequency,Coupon Frequency,Reference Rate Code
CZGB 3.00/33,CZ0001005037,2033-01-15,1000,CZK,3.00,2022-01-15,FOLLOWING,30/360,At Maturity,Annual,
CZGB VAR/27,CZ0001005243,2027-11-19,10000,CZK,0.35,2017-11-19,MODFOLLOWING,ACT/360,At Maturity,Semi-Annual,PRIBOR6M
";

const CURVES: &str = "\
currency,observation_date,tenor,rate
CZK,2024-11-24,5,3.0
CZK,2024-11-24,1,2.0
CZK,2024-11-24,3,2.5
CZK,2024-11-25,1,3.7
";

fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_and_values_reference_bond() {
    let bonds = temp_csv(BONDS);
    let curves = temp_csv(CURVES);

    let (catalog, set) = load_datasets(bonds.path(), curves.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.skipped_floating(), 1);
    assert_eq!(set.len(), 4);

    let terms = catalog.by_isin("CZ0001005037").unwrap();
    assert_eq!(terms.nominal_value, dec!(1000));

    let trade_date = Date::from_ymd(2024, 11, 24).unwrap();
    let trade = TradeContext::new(trade_date, TradeDirection::Buy, 1, 0.0);
    let value = npv(terms, &set, &trade).unwrap();
    assert!(value > 900.0 && value < 1010.0);
}

#[test]
fn lists_observation_dates() {
    let curves = temp_csv(CURVES);
    let set = load_yield_curves(curves.path()).unwrap();
    let czk = CurrencyCode::new("CZK").unwrap();

    assert_eq!(
        set.observation_dates(czk),
        vec![
            Date::from_ymd(2024, 11, 24).unwrap(),
            Date::from_ymd(2024, 11, 25).unwrap()
        ]
    );
    assert_eq!(set.currencies(), vec![czk]);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BondCatalog::from_path(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, FileError::Read { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn missing_column_is_parse_error() {
    let bonds = temp_csv("Issue Name,ISIN\nA,CZ0000000001\n");
    let err = BondCatalog::from_path(bonds.path()).unwrap_err();
    assert!(matches!(err, FileError::Parse { row: 2, .. }));
}

#[test]
fn sample_datasets_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let (catalog, set) = load_datasets(
        root.join("bond_emissions.csv"),
        root.join("yield_curves.csv"),
    )
    .unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.skipped_floating(), 1);
    assert!(!set.is_empty());
}

#[test]
fn sample_currencies_cover_curve_currencies() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let table = CurrencyTable::from_path(root.join("currencies.csv")).unwrap();
    let set = load_yield_curves(root.join("yield_curves.csv")).unwrap();

    for code in set.currencies() {
        assert!(table.name_of(code).is_some(), "{code} has no name");
    }
}
