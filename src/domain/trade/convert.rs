//! Conversions from wire types to domain types for trades.

use super::wire::{HistoricalTradesResponse, TradeResponse};
use super::{HistoricalTrade, Trade};
use crate::error::SdkError;

impl TryFrom<TradeResponse> for Trade {
    type Error = SdkError;

    fn try_from(t: TradeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            side: t.side.parse()?,
            trade_id: t.trade_id,
            price: t.price,
            base_volume: t.base_volume,
            target_volume: t.target_volume,
            trade_timestamp: t.trade_timestamp,
        })
    }
}

impl TryFrom<HistoricalTradesResponse> for HistoricalTrade {
    type Error = SdkError;

    fn try_from(h: HistoricalTradesResponse) -> Result<Self, Self::Error> {
        let trades = h
            .trades
            .into_iter()
            .map(Trade::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            ticker_id: h.ticker_id.into(),
            pool_id: h.pool_id,
            timestamp: h.timestamp,
            trades,
        })
    }
}
