//! Wire types for the pairs endpoint.

use serde::Deserialize;

/// REST representation of one pair.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PairResponse {
    pub ticker_id: String,
    pub base: String,
    pub target: String,
    #[serde(default)]
    pub pool_id: String,
}
