//! Order book domain: bid/ask depth for one trading pair.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TickerId;
use rust_decimal::Decimal;
use serde::Serialize;

/// One price level of the book.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BookLevel {
    pub price: Decimal,
    pub volume: Decimal,
}

/// Order book snapshot.
///
/// `bids` and `asks` keep the order the service sent them in; either side may
/// be empty for an illiquid pair.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderBook {
    pub ticker_id: TickerId,
    pub pool_id: String,
    pub timestamp: String,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Number of levels across both sides.
    pub fn depth(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
