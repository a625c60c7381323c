//! Conversions from wire types to domain types for pairs.

use super::wire::PairResponse;
use super::TradingPair;

impl From<PairResponse> for TradingPair {
    fn from(p: PairResponse) -> Self {
        Self {
            ticker_id: p.ticker_id.into(),
            base: p.base,
            target: p.target,
            pool_id: p.pool_id,
        }
    }
}
