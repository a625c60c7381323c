//! Endpoint table: one constructor per API operation.
//!
//! Each [`Endpoint`] describes a request (method, path, query, body) together
//! with the [`ResultKind`] the response envelope is mapped through. The HTTP
//! layer executes any endpoint the same way.

use crate::domain::offer::wire::PostOfferRequest;
use crate::domain::offer::SearchOffersParams;
use crate::domain::trade::HistoricalTradesParams;
use crate::envelope::ResultKind;
use crate::http::Method;

pub const OFFERS_PATH: &str = "/v1/offers";
pub const PAIRS_PATH: &str = "/v1/prices/pairs";
pub const TICKERS_PATH: &str = "/v1/prices/tickers";
pub const ORDERBOOK_PATH: &str = "/v1/prices/orderbook";
pub const HISTORICAL_TRADES_PATH: &str = "/v1/prices/historical_trades";

/// A fully described API request.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    pub kind: ResultKind,
}

impl Endpoint {
    fn get(path: impl Into<String>, query: Vec<(&'static str, String)>, kind: ResultKind) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query,
            body: None,
            kind,
        }
    }

    /// `POST /v1/offers` with `{"offer": <offer>}`.
    pub fn post_offer(offer: &str) -> Self {
        let request = PostOfferRequest {
            offer: offer.to_string(),
        };
        Self {
            method: Method::Post,
            path: OFFERS_PATH.to_string(),
            query: Vec::new(),
            body: serde_json::to_value(&request).ok(),
            kind: ResultKind::PostOffer,
        }
    }

    pub fn search_offers(params: &SearchOffersParams) -> Self {
        Self::get(OFFERS_PATH, params.to_query(), ResultKind::Offers)
    }

    pub fn get_offer(id: &str) -> Self {
        Self::get(
            format!("{}/{}", OFFERS_PATH, urlencoding::encode(id)),
            Vec::new(),
            ResultKind::Offer,
        )
    }

    pub fn pairs() -> Self {
        Self::get(PAIRS_PATH, Vec::new(), ResultKind::Pairs)
    }

    pub fn tickers(ticker_id: Option<&str>) -> Self {
        let mut query = Vec::new();
        push_query(&mut query, "ticker_id", ticker_id);
        Self::get(TICKERS_PATH, query, ResultKind::Tickers)
    }

    pub fn orderbook(ticker_id: &str, depth: Option<u32>) -> Self {
        let mut query = vec![("ticker_id", ticker_id.to_string())];
        push_query(&mut query, "depth", depth);
        Self::get(ORDERBOOK_PATH, query, ResultKind::OrderBook)
    }

    pub fn historical_trades(params: &HistoricalTradesParams) -> Self {
        Self::get(
            HISTORICAL_TRADES_PATH,
            params.to_query(),
            ResultKind::HistoricalTrades,
        )
    }

    /// Same request as [`historical_trades`](Self::historical_trades), mapped
    /// to the bare `trades` list.
    #[deprecated(note = "use `historical_trades`")]
    pub fn trade_list(params: &HistoricalTradesParams) -> Self {
        Self::get(HISTORICAL_TRADES_PATH, params.to_query(), ResultKind::TradeList)
    }

    /// Any path, with the decoded body returned unchanged.
    pub fn raw(method: Method, path: &str, query: Vec<(&'static str, String)>) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            method,
            path,
            query,
            body: None,
            kind: ResultKind::Raw,
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Append `key=value` when `value` is set.
pub(crate) fn push_query<V: ToString>(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<V>,
) {
    if let Some(v) = value {
        query.push((key, v.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;

    #[test]
    fn test_post_offer_body() {
        let ep = Endpoint::post_offer("offer1abc");
        assert_eq!(ep.method, Method::Post);
        assert_eq!(ep.path, "/v1/offers");
        assert_eq!(ep.body, Some(serde_json::json!({"offer": "offer1abc"})));
        assert_eq!(ep.kind, ResultKind::PostOffer);
    }

    #[test]
    fn test_get_offer_encodes_id() {
        let ep = Endpoint::get_offer("HR7aHbCXsJto7iS9uBkiiGJx6iGySxoNqUGQvrZfnj6B");
        assert_eq!(ep.path, "/v1/offers/HR7aHbCXsJto7iS9uBkiiGJx6iGySxoNqUGQvrZfnj6B");
        assert_eq!(Endpoint::get_offer("a/b c").path, "/v1/offers/a%2Fb%20c");
        assert_eq!(ep.kind, ResultKind::Offer);
    }

    #[test]
    fn test_unset_params_are_not_sent() {
        assert!(Endpoint::tickers(None).query.is_empty());
        assert_eq!(
            Endpoint::tickers(Some("XCH_DBX")).query,
            vec![("ticker_id", "XCH_DBX".to_string())]
        );
        assert_eq!(
            Endpoint::orderbook("XCH_DBX", None).query,
            vec![("ticker_id", "XCH_DBX".to_string())]
        );
        assert!(Endpoint::search_offers(&SearchOffersParams::default())
            .query
            .is_empty());
    }

    #[test]
    fn test_zero_depth_and_limit_are_sent() {
        let ep = Endpoint::orderbook("XCH_DBX", Some(0));
        assert_eq!(
            ep.query,
            vec![("ticker_id", "XCH_DBX".to_string()), ("depth", "0".to_string())]
        );

        let params = HistoricalTradesParams::new("XCH_DBX")
            .with_side(Side::Buy)
            .unlimited();
        let ep = Endpoint::historical_trades(&params);
        assert_eq!(ep.path, HISTORICAL_TRADES_PATH);
        assert!(ep.query.contains(&("limit", "0".to_string())));
        assert!(ep.query.contains(&("type", "buy".to_string())));
    }

    #[test]
    #[allow(deprecated)]
    fn test_trade_list_shares_path() {
        let params = HistoricalTradesParams::new("XCH_DBX");
        let ep = Endpoint::trade_list(&params);
        assert_eq!(ep.path, HISTORICAL_TRADES_PATH);
        assert_eq!(ep.kind, ResultKind::TradeList);
    }

    #[test]
    fn test_raw_path_normalized() {
        let ep = Endpoint::raw(Method::Get, "v1/prices/pairs", Vec::new());
        assert_eq!(ep.path, "/v1/prices/pairs");
        assert_eq!(ep.kind, ResultKind::Raw);
        assert!(ep.body.is_none());
    }
}
