//! Domain types for bond valuation.
//!
//! - [`BondTerms`]: static description of a fixed-rate bond
//! - [`TradeContext`] / [`TradeDirection`]: the position being valued
//! - [`TradePrice`]: quoted clean price and accrued interest

mod terms;
mod trade;

pub use terms::BondTerms;
pub use trade::{TradeContext, TradeDirection, TradePrice};
