//! Wire types for the tickers endpoint.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::Deserialize;

/// REST representation of one ticker.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TickerResponse {
    pub ticker_id: String,
    pub base_currency: String,
    pub target_currency: String,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub last_price: Decimal,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub current_avg_price: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::decimal::deserialize")]
    pub base_volume: Decimal,
    #[serde(default, deserialize_with = "serde_util::decimal::deserialize")]
    pub target_volume: Decimal,
    #[serde(default)]
    pub pool_id: String,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub bid: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub ask: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub high: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub low: Option<Decimal>,
}
