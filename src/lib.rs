//! # Dexie SDK
//!
//! Async Rust client for the Dexie offer exchange REST API: post and search
//! offers, list trading pairs, and read tickers, order books and historical
//! trades. Also computes Dexie offer ids from offer files.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, offer id utilities, domain models
//! 2. **Endpoints**: `Endpoint` table and the response envelope mapper
//! 3. **HTTP**: `Transport` trait, `ReqwestTransport`, and `DexieHttp`
//! 4. **High-Level Client**: `DexieClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dexie_sdk::prelude::*;
//!
//! let client = DexieClient::builder().build()?;
//!
//! let offers = client
//!     .offers()
//!     .search(&SearchOffersParams::new().with_requested("xch").with_page_size(10))
//!     .await?;
//! let book = client.orderbooks().get("XCH_DBX", Some(6)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and offer id utilities.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Endpoints ───────────────────────────────────────────────────────

/// One constructor per API operation.
pub mod endpoint;

/// Response envelope mapping.
pub mod envelope;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport abstraction and request executor.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DexieClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + offer ids
    pub use crate::shared::{
        is_offer_id, offer_id, offer_id_from_str, verify_offer_id, Side, TickerId,
    };

    // Domain types
    pub use crate::domain::offer::{
        Offer, OfferAsset, OfferStatus, PostOfferResponse, SearchOffersParams, SortBy,
    };
    pub use crate::domain::orderbook::{BookLevel, OrderBook};
    pub use crate::domain::pair::TradingPair;
    pub use crate::domain::ticker::Ticker;
    pub use crate::domain::trade::{HistoricalTrade, HistoricalTradesParams, Trade};

    // Endpoints + envelope
    pub use crate::endpoint::Endpoint;
    pub use crate::envelope::{ApiResponse, FromPayload, Payload, ResultKind};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, TESTNET_API_URL};

    // HTTP + client
    pub use crate::client::{
        DexieClient, OffersClient, OrderbooksClient, PairsClient, TickersClient, TradesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::client::DexieClientBuilder;
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{Method, Transport};
}
