//! Response envelope mapper.
//!
//! Every service response is a JSON object with a boolean `success` and the
//! payload either under one key (`"offers"`, `"orderbook"`, ...) or spread over
//! the envelope itself. [`ResultKind`] names the expected payload and
//! [`map_response`] turns a raw body into typed domain values.

use crate::domain::offer::wire::{OfferResponse, PostOfferResponse};
use crate::domain::offer::Offer;
use crate::domain::orderbook::wire::OrderBookResponse;
use crate::domain::orderbook::OrderBook;
use crate::domain::pair::wire::PairResponse;
use crate::domain::pair::TradingPair;
use crate::domain::ticker::wire::TickerResponse;
use crate::domain::ticker::Ticker;
use crate::domain::trade::wire::{HistoricalTradesResponse, TradeResponse};
use crate::domain::trade::{HistoricalTrade, Trade};
use crate::error::SdkError;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ─── ResultKind ──────────────────────────────────────────────────────────────

/// The payload an endpoint is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    PostOffer,
    Offers,
    Offer,
    Pairs,
    Tickers,
    OrderBook,
    HistoricalTrades,
    /// Only the `trades` list of a historical trades response.
    TradeList,
    /// No mapping; the decoded body is returned as is.
    Raw,
}

/// Where a payload sits inside the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKey {
    /// An array under the given key.
    Plural(&'static str),
    /// A single object under the given key.
    Singular(&'static str),
    /// The envelope itself, minus `success`.
    StripSuccess,
    Unmapped,
}

impl ResultKind {
    pub fn envelope_key(&self) -> EnvelopeKey {
        match self {
            ResultKind::PostOffer => EnvelopeKey::StripSuccess,
            ResultKind::Offers => EnvelopeKey::Plural("offers"),
            ResultKind::Offer => EnvelopeKey::Singular("offer"),
            ResultKind::Pairs => EnvelopeKey::Plural("pairs"),
            ResultKind::Tickers => EnvelopeKey::Plural("tickers"),
            ResultKind::OrderBook => EnvelopeKey::Singular("orderbook"),
            ResultKind::HistoricalTrades => EnvelopeKey::StripSuccess,
            ResultKind::TradeList => EnvelopeKey::Plural("trades"),
            ResultKind::Raw => EnvelopeKey::Unmapped,
        }
    }
}

// ─── Payload ─────────────────────────────────────────────────────────────────

/// A mapped payload, one variant per [`ResultKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    PostedOffer(PostOfferResponse),
    Offers(Vec<Offer>),
    Offer(Offer),
    Pairs(Vec<TradingPair>),
    Tickers(Vec<Ticker>),
    OrderBook(OrderBook),
    HistoricalTrades(HistoricalTrade),
    Trades(Vec<Trade>),
    Raw(Value),
}

impl Payload {
    pub fn name(&self) -> &'static str {
        match self {
            Payload::PostedOffer(_) => "PostedOffer",
            Payload::Offers(_) => "Offers",
            Payload::Offer(_) => "Offer",
            Payload::Pairs(_) => "Pairs",
            Payload::Tickers(_) => "Tickers",
            Payload::OrderBook(_) => "OrderBook",
            Payload::HistoricalTrades(_) => "HistoricalTrades",
            Payload::Trades(_) => "Trades",
            Payload::Raw(_) => "Raw",
        }
    }
}

/// Typed extraction from a [`Payload`].
pub trait FromPayload: Sized {
    fn from_payload(payload: Payload) -> Result<Self, SdkError>;
}

macro_rules! impl_from_payload {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl FromPayload for $ty {
                fn from_payload(payload: Payload) -> Result<Self, SdkError> {
                    match payload {
                        Payload::$variant(v) => Ok(v),
                        other => Err(SdkError::Envelope(format!(
                            "expected {} payload, got {}",
                            stringify!($variant),
                            other.name()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_from_payload! {
    PostedOffer => PostOfferResponse,
    Offers => Vec<Offer>,
    Offer => Offer,
    Pairs => Vec<TradingPair>,
    Tickers => Vec<Ticker>,
    OrderBook => OrderBook,
    HistoricalTrades => HistoricalTrade,
    Trades => Vec<Trade>,
    Raw => Value,
}

// ─── ApiResponse ─────────────────────────────────────────────────────────────

/// Outcome of a call that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    /// The envelope's `success` was false or missing. Carries the decoded body.
    Unsuccessful(Value),
    /// The requested resource does not exist.
    NotFound,
}

impl<T> ApiResponse<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(v) => ApiResponse::Success(f(v)),
            ApiResponse::Unsuccessful(body) => ApiResponse::Unsuccessful(body),
            ApiResponse::NotFound => ApiResponse::NotFound,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ApiResponse<U>, E> {
        Ok(match self {
            ApiResponse::Success(v) => ApiResponse::Success(f(v)?),
            ApiResponse::Unsuccessful(body) => ApiResponse::Unsuccessful(body),
            ApiResponse::NotFound => ApiResponse::NotFound,
        })
    }

    /// The payload, if the call succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }
}

// ─── Mapping ─────────────────────────────────────────────────────────────────

/// Decode `body` and map it according to `kind`.
pub fn map_response(kind: ResultKind, body: &[u8]) -> Result<ApiResponse<Payload>, SdkError> {
    let value: Value = serde_json::from_slice(body)?;
    map_value(kind, value)
}

/// Map an already decoded body according to `kind`.
pub fn map_value(kind: ResultKind, value: Value) -> Result<ApiResponse<Payload>, SdkError> {
    let key = kind.envelope_key();
    if key == EnvelopeKey::Unmapped {
        tracing::debug!(?kind, "No envelope mapping, returning raw body");
        return Ok(ApiResponse::Success(Payload::Raw(value)));
    }

    if value.get("success").and_then(Value::as_bool) != Some(true) {
        tracing::warn!(?kind, body = %value, "Unsuccessful response envelope");
        return Ok(ApiResponse::Unsuccessful(value));
    }

    let data = extract(key, value)?;
    let payload = match kind {
        ResultKind::PostOffer => Payload::PostedOffer(serde_json::from_value(data)?),
        ResultKind::Offers => Payload::Offers(decode_list::<OfferResponse, _>(data)?),
        ResultKind::Offer => Payload::Offer(decode_one::<OfferResponse, _>(data)?),
        ResultKind::Pairs => Payload::Pairs(decode_list::<PairResponse, _>(data)?),
        ResultKind::Tickers => Payload::Tickers(decode_list::<TickerResponse, _>(data)?),
        ResultKind::OrderBook => Payload::OrderBook(decode_one::<OrderBookResponse, _>(data)?),
        ResultKind::HistoricalTrades => {
            Payload::HistoricalTrades(decode_one::<HistoricalTradesResponse, _>(data)?)
        }
        ResultKind::TradeList => Payload::Trades(decode_list::<TradeResponse, _>(data)?),
        ResultKind::Raw => Payload::Raw(data),
    };
    Ok(ApiResponse::Success(payload))
}

fn extract(key: EnvelopeKey, mut value: Value) -> Result<Value, SdkError> {
    match key {
        EnvelopeKey::Plural(name) => {
            let data = take_field(&mut value, name)?;
            if data.is_array() {
                Ok(data)
            } else {
                Err(SdkError::Envelope(format!("`{name}` is not an array")))
            }
        }
        EnvelopeKey::Singular(name) => {
            let data = take_field(&mut value, name)?;
            if data.is_object() {
                Ok(data)
            } else {
                Err(SdkError::Envelope(format!("`{name}` is not an object")))
            }
        }
        EnvelopeKey::StripSuccess => {
            if let Some(map) = value.as_object_mut() {
                map.remove("success");
            }
            Ok(value)
        }
        EnvelopeKey::Unmapped => Ok(value),
    }
}

fn take_field(value: &mut Value, name: &str) -> Result<Value, SdkError> {
    value
        .as_object_mut()
        .and_then(|map| map.remove(name))
        .filter(|v| !v.is_null())
        .ok_or_else(|| SdkError::Envelope(format!("successful response is missing `{name}`")))
}

fn decode_one<W, D>(value: Value) -> Result<D, SdkError>
where
    W: DeserializeOwned,
    D: TryFrom<W>,
    SdkError: From<D::Error>,
{
    let wire: W = serde_json::from_value(value)?;
    Ok(D::try_from(wire)?)
}

fn decode_list<W, D>(value: Value) -> Result<Vec<D>, SdkError>
where
    W: DeserializeOwned,
    D: TryFrom<W>,
    SdkError: From<D::Error>,
{
    let wires: Vec<W> = serde_json::from_value(value)?;
    wires
        .into_iter()
        .map(|w| D::try_from(w).map_err(SdkError::from))
        .collect()
}
