//! Ticker domain: aggregated price and volume statistics per pair.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TickerId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Market statistics for one pair.
///
/// Optional prices are `None` when the pair has no open bid/ask or no trades
/// in the reporting window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ticker {
    pub ticker_id: TickerId,
    pub base_currency: String,
    pub target_currency: String,
    pub last_price: Decimal,
    pub current_avg_price: Option<Decimal>,
    pub base_volume: Decimal,
    pub target_volume: Decimal,
    pub pool_id: String,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
}

impl Ticker {
    /// `ask - bid`, when both sides are quoted.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask? - self.bid?)
    }
}
