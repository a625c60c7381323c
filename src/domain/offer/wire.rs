//! Wire types for offer requests and responses.

use crate::shared::serde_util::{self, null_to_default};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST representation of a single offer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OfferResponse {
    pub id: String,
    /// Integer status code; kept raw so unexpected encodings reach conversion.
    #[serde(default)]
    pub status: serde_json::Value,
    /// Absent when the search was made with `compact=true`.
    #[serde(default)]
    pub offer: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub offered_coins: Vec<String>,
    #[serde(default)]
    pub date_found: Option<String>,
    #[serde(default)]
    pub date_completed: Option<String>,
    #[serde(default)]
    pub date_pending: Option<String>,
    #[serde(default)]
    pub spent_block_index: Option<u64>,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_to_default")]
    pub offered: Vec<OfferAssetResponse>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub requested: Vec<OfferAssetResponse>,
    #[serde(default, deserialize_with = "serde_util::decimal::deserialize")]
    pub fees: Decimal,
    #[serde(default)]
    pub mempool: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub related_offers: Vec<serde_json::Value>,
    #[serde(default)]
    pub coins: Option<Vec<serde_json::Value>>,
    #[serde(default, deserialize_with = "serde_util::option_decimal::deserialize")]
    pub previous_price: Option<Decimal>,
}

/// One asset entry in an offer's `offered` / `requested` lists.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OfferAssetResponse {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "serde_util::decimal::deserialize")]
    pub amount: Decimal,
}

/// Body for `POST /v1/offers`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostOfferRequest {
    pub offer: String,
}

/// Response for `POST /v1/offers`, with the envelope's `success` removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PostOfferResponse {
    /// Id the service assigned to the posted offer.
    #[serde(default)]
    pub id: Option<String>,
    /// Whether the service had already seen this offer.
    #[serde(default)]
    pub known: Option<bool>,
}
