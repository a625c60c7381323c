//! Wire types for the historical trades endpoint.

use crate::shared::serde_util::{self, null_to_default};
use rust_decimal::Decimal;
use serde::Deserialize;

/// REST representation of one trade.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TradeResponse {
    #[serde(deserialize_with = "serde_util::text::deserialize")]
    pub trade_id: String,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub price: Decimal,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub base_volume: Decimal,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub target_volume: Decimal,
    #[serde(deserialize_with = "serde_util::timestamp_ms::deserialize")]
    pub trade_timestamp: i64,
    /// `"buy"` or `"sell"`.
    #[serde(rename = "type")]
    pub side: String,
}

/// Historical trades response with the envelope's `success` removed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoricalTradesResponse {
    pub ticker_id: String,
    #[serde(default)]
    pub pool_id: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub trades: Vec<TradeResponse>,
}
