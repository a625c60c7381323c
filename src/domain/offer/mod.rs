//! Offer domain: posted offers, their lifecycle status, and search filters.

pub mod client;
mod convert;
pub mod wire;

use crate::endpoint::push_query;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use wire::PostOfferResponse;

// ─── OfferStatus ─────────────────────────────────────────────────────────────

/// Lifecycle status of an offer.
///
/// The service encodes statuses as integers `0..=4`. Any other code decodes to
/// [`OfferStatus::Unknown`] so new service-side statuses never fail a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OfferStatus {
    Active,
    Pending,
    Cancelling,
    Cancelled,
    Completed,
    #[default]
    Unknown,
}

impl OfferStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Active,
            1 => Self::Pending,
            2 => Self::Cancelling,
            3 => Self::Cancelled,
            4 => Self::Completed,
            _ => Self::Unknown,
        }
    }

    /// The service's integer code. `Unknown` has no service code and maps to 5.
    pub fn code(&self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Pending => 1,
            Self::Cancelling => 2,
            Self::Cancelled => 3,
            Self::Completed => 4,
            Self::Unknown => 5,
        }
    }

    /// Decode the raw `status` value of an offer payload.
    pub fn from_json(value: &serde_json::Value) -> Self {
        value.as_i64().map(Self::from_code).unwrap_or_default()
    }
}

impl From<i64> for OfferStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl std::fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OfferStatus::Active => write!(f, "Active"),
            OfferStatus::Pending => write!(f, "Pending"),
            OfferStatus::Cancelling => write!(f, "Cancelling"),
            OfferStatus::Cancelled => write!(f, "Cancelled"),
            OfferStatus::Completed => write!(f, "Completed"),
            OfferStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Serialize for OfferStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for OfferStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

// ─── SortBy ──────────────────────────────────────────────────────────────────

/// Sort order accepted by the offer search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Price,
    #[serde(rename = "price_desc")]
    PriceDesc,
    DateCompleted,
    DateFound,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::PriceDesc => "price_desc",
            Self::DateCompleted => "date_completed",
            Self::DateFound => "date_found",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Offer ───────────────────────────────────────────────────────────────────

/// One asset an offer gives or asks for.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OfferAsset {
    pub id: String,
    pub code: Option<String>,
    pub name: Option<String>,
    pub amount: Decimal,
}

/// An offer as reported by the service.
///
/// The offer file itself is carried as an opaque string.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Offer {
    pub id: String,
    pub status: OfferStatus,
    pub offer: Option<String>,
    pub offered_coins: Vec<String>,
    pub date_found: Option<String>,
    pub date_completed: Option<String>,
    pub date_pending: Option<String>,
    pub spent_block_index: Option<u64>,
    pub price: Decimal,
    pub offered: Vec<OfferAsset>,
    pub requested: Vec<OfferAsset>,
    pub fees: Decimal,
    pub mempool: Option<serde_json::Value>,
    pub related_offers: Vec<serde_json::Value>,
    pub coins: Option<Vec<serde_json::Value>>,
    pub previous_price: Option<Decimal>,
}

impl Offer {
    pub fn status(&self) -> OfferStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == OfferStatus::Completed
    }

    pub fn is_active(&self) -> bool {
        self.status == OfferStatus::Active
    }

    pub fn date_found_utc(&self) -> Option<DateTime<Utc>> {
        self.date_found.as_deref().and_then(parse_utc)
    }

    pub fn date_completed_utc(&self) -> Option<DateTime<Utc>> {
        self.date_completed.as_deref().and_then(parse_utc)
    }

    pub fn date_pending_utc(&self) -> Option<DateTime<Utc>> {
        self.date_pending.as_deref().and_then(parse_utc)
    }
}

fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ─── SearchOffersParams ──────────────────────────────────────────────────────

/// Query parameters for `GET /v1/offers`.
///
/// All filters are optional; an empty set returns the latest offers. Values are
/// sent as given, range checks are left to the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOffersParams {
    pub status: Option<OfferStatus>,
    pub offered: Option<String>,
    pub requested: Option<String>,
    pub offered_or_requested: Option<String>,
    pub sort: Option<SortBy>,
    /// Omit full offer files from the results.
    pub compact: Option<bool>,
    /// Include offers requesting several assets (only applies with `requested`).
    pub include_multiple_requested: Option<bool>,
    pub page: Option<u32>,
    /// Results per page. The service caps pages at 100; use `page` for more.
    pub page_size: Option<u32>,
}

impl SearchOffersParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: OfferStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_offered(mut self, asset: impl Into<String>) -> Self {
        self.offered = Some(asset.into());
        self
    }

    pub fn with_requested(mut self, asset: impl Into<String>) -> Self {
        self.requested = Some(asset.into());
        self
    }

    pub fn with_offered_or_requested(mut self, asset: impl Into<String>) -> Self {
        self.offered_or_requested = Some(asset.into());
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = Some(true);
        self
    }

    pub fn with_multiple_requested(mut self) -> Self {
        self.include_multiple_requested = Some(true);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Query pairs for the set filters, in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "status", self.status.map(|s| s.code()));
        push_query(&mut query, "offered", self.offered.as_deref());
        push_query(&mut query, "requested", self.requested.as_deref());
        push_query(
            &mut query,
            "offered_or_requested",
            self.offered_or_requested.as_deref(),
        );
        push_query(&mut query, "sort", self.sort.map(|s| s.as_str()));
        push_query(&mut query, "compact", self.compact);
        push_query(
            &mut query,
            "include_multiple_requested",
            self.include_multiple_requested,
        );
        push_query(&mut query, "page", self.page);
        push_query(&mut query, "page_size", self.page_size);
        query
    }
}
