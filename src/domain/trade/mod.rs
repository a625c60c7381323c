//! Trade domain: executed trades and historical trade queries.

pub mod client;
mod convert;
pub mod wire;

use crate::endpoint::push_query;
use crate::shared::{Side, TickerId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A completed trade.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trade {
    pub trade_id: String,
    pub price: Decimal,
    pub base_volume: Decimal,
    pub target_volume: Decimal,
    /// Epoch milliseconds.
    pub trade_timestamp: i64,
    #[serde(rename = "type")]
    pub side: Side,
}

impl Trade {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.trade_timestamp)
    }
}

/// Historical trades for one pair together with the response header fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoricalTrade {
    pub ticker_id: TickerId,
    pub pool_id: String,
    pub timestamp: String,
    pub trades: Vec<Trade>,
}

impl HistoricalTrade {
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

// ─── HistoricalTradesParams ──────────────────────────────────────────────────

/// Query parameters for `GET /v1/prices/historical_trades`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalTradesParams {
    pub ticker_id: TickerId,
    pub side: Option<Side>,
    /// Trades to return counting back from now. The service defaults to 1000;
    /// `0` returns all of them.
    pub limit: Option<u32>,
    /// Epoch milliseconds.
    pub start_time: Option<i64>,
    /// Epoch milliseconds.
    pub end_time: Option<i64>,
}

impl HistoricalTradesParams {
    pub fn new(ticker_id: impl Into<TickerId>) -> Self {
        Self {
            ticker_id: ticker_id.into(),
            side: None,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request the full history (`limit=0`).
    pub fn unlimited(self) -> Self {
        self.with_limit(0)
    }

    pub fn with_start_time(mut self, start_ms: i64) -> Self {
        self.start_time = Some(start_ms);
        self
    }

    pub fn with_end_time(mut self, end_ms: i64) -> Self {
        self.end_time = Some(end_ms);
        self
    }

    pub fn with_time_range(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.with_start_time(start.timestamp_millis())
            .with_end_time(end.timestamp_millis())
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("ticker_id", self.ticker_id.to_string())];
        push_query(&mut query, "type", self.side.map(|s| s.as_str()));
        push_query(&mut query, "limit", self.limit);
        push_query(&mut query, "start_time", self.start_time);
        push_query(&mut query, "end_time", self.end_time);
        query
    }
}
