//! Pair domain: the traded asset pairs.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TickerId;
use serde::Serialize;

/// A traded pair. `ticker_id` is unique within one response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct TradingPair {
    pub ticker_id: TickerId,
    pub base: String,
    pub target: String,
    pub pool_id: String,
}
