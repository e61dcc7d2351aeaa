//! CLI command implementations.

pub mod bonds;
pub mod cashflows;
pub mod currencies;
pub mod curve;
pub mod scenarios;
pub mod schedule;
pub mod value;

pub use bonds::BondsArgs;
pub use cashflows::CashflowsArgs;
pub use currencies::CurrenciesArgs;
pub use curve::CurveArgs;
pub use scenarios::ScenariosArgs;
pub use schedule::ScheduleArgs;
pub use value::ValueArgs;

use clap::{Args, ValueEnum};

use yieldline_bonds::{BondTerms, TradeContext, TradeDirection};
use yieldline_core::{CurrencyCode, Date};
use yieldline_ext_file::BondCatalog;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a three-letter currency code.
pub fn parse_currency(s: &str) -> CliResult<CurrencyCode> {
    CurrencyCode::new(s).map_err(|_| CliError::InvalidCurrency(s.to_string()))
}

/// Looks a bond up by ISIN, then by issue name.
pub fn find_bond<'a>(catalog: &'a BondCatalog, key: &str) -> CliResult<&'a BondTerms> {
    catalog
        .find(key)
        .ok_or_else(|| CliError::BondNotFound(key.to_string()))
}

/// Trade direction choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DirectionChoice {
    /// Long position
    #[default]
    Buy,
    /// Short position
    Sell,
}

impl From<DirectionChoice> for TradeDirection {
    fn from(choice: DirectionChoice) -> Self {
        match choice {
            DirectionChoice::Buy => TradeDirection::Buy,
            DirectionChoice::Sell => TradeDirection::Sell,
        }
    }
}

/// Position arguments shared by the trade commands.
#[derive(Args, Debug, Clone)]
pub struct PositionArgs {
    /// ISIN or issue name of the bond
    #[arg(short, long)]
    pub isin: String,

    /// Trade date (YYYY-MM-DD); selects the curve observation date
    #[arg(short, long)]
    pub trade_date: String,

    /// Number of pieces
    #[arg(short, long, default_value_t = 1)]
    pub pieces: u32,

    /// Trade direction
    #[arg(short, long, value_enum, default_value = "buy")]
    pub direction: DirectionChoice,
}

impl PositionArgs {
    /// Builds the trade context for a shift.
    pub fn trade(&self, shift_percent: f64) -> CliResult<TradeContext> {
        Ok(TradeContext::new(
            parse_date(&self.trade_date)?,
            self.direction.into(),
            self.pieces,
            shift_percent,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-11-24").unwrap(),
            Date::from_ymd(2024, 11, 24).unwrap()
        );
        assert!(matches!(parse_date("24/11/2024"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("czk").unwrap().as_str(), "CZK");
        assert!(parse_currency("KORUNA").is_err());
    }

    #[test]
    fn test_position_trade() {
        let args = PositionArgs {
            isin: "X".to_string(),
            trade_date: "2024-11-24".to_string(),
            pieces: 4,
            direction: DirectionChoice::Sell,
        };
        let trade = args.trade(0.5).unwrap();
        assert_eq!(trade.signed_pieces, -4);
        assert_eq!(trade.shift_percent, 0.5);
    }
}
