//! Trade-level inputs: direction, size, scenario shift and quoted price.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use yieldline_core::Date;

use crate::error::BondError;

/// Side of the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Long position; cash flows are received.
    #[default]
    Buy,
    /// Short position; cash flows are paid.
    Sell,
}

impl TradeDirection {
    /// Returns `1` for a buy and `-1` for a sell.
    #[must_use]
    pub fn sign(&self) -> i64 {
        match self {
            TradeDirection::Buy => 1,
            TradeDirection::Sell => -1,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "buy"),
            TradeDirection::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "b" => Ok(TradeDirection::Buy),
            "sell" | "s" => Ok(TradeDirection::Sell),
            _ => Err(BondError::UnsupportedDirection {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// The position being valued.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeContext {
    /// Trade date; also selects the curve observation date.
    pub trade_date: Date,
    /// Number of pieces, negative for a sell.
    pub signed_pieces: i64,
    /// Parallel shift added to every discount rate, in percentage points.
    pub shift_percent: f64,
}

impl TradeContext {
    /// Creates a trade from a direction and an unsigned piece count.
    #[must_use]
    pub fn new(trade_date: Date, direction: TradeDirection, pieces: u32, shift_percent: f64) -> Self {
        Self {
            trade_date,
            signed_pieces: direction.sign() * i64::from(pieces),
            shift_percent,
        }
    }

    /// Creates a trade from an already signed piece count.
    #[must_use]
    pub fn with_signed_pieces(trade_date: Date, signed_pieces: i64, shift_percent: f64) -> Self {
        Self {
            trade_date,
            signed_pieces,
            shift_percent,
        }
    }

    /// Returns a copy with a different shift.
    #[must_use]
    pub fn with_shift(mut self, shift_percent: f64) -> Self {
        self.shift_percent = shift_percent;
        self
    }

    /// Returns the trade direction implied by the sign of the position.
    #[must_use]
    pub fn direction(&self) -> TradeDirection {
        if self.signed_pieces < 0 {
            TradeDirection::Sell
        } else {
            TradeDirection::Buy
        }
    }

    /// Returns the absolute number of pieces.
    #[must_use]
    pub fn pieces(&self) -> u64 {
        self.signed_pieces.unsigned_abs()
    }
}

/// Quoted price of one trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePrice {
    /// Clean price in percent of nominal.
    pub clean_price_percent: Decimal,
    /// Accrued interest per piece, in currency units.
    pub accrued_interest_per_piece: Decimal,
}

impl TradePrice {
    /// Creates a new quoted price.
    #[must_use]
    pub fn new(clean_price_percent: Decimal, accrued_interest_per_piece: Decimal) -> Self {
        Self {
            clean_price_percent,
            accrued_interest_per_piece,
        }
    }

    /// Returns the unsigned total paid for `pieces` pieces.
    ///
    /// `(clean / 100 * nominal + accrued) * pieces`
    #[must_use]
    pub fn total_price(&self, pieces: u64, nominal_value: Decimal) -> Decimal {
        let per_piece = self.clean_price_percent / Decimal::ONE_HUNDRED * nominal_value
            + self.accrued_interest_per_piece;
        per_piece * Decimal::from(pieces)
    }
}
