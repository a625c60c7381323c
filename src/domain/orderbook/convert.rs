//! Conversions from wire types to domain types for order books.

use super::wire::{BookLevelResponse, OrderBookResponse};
use super::{BookLevel, OrderBook};

impl From<BookLevelResponse> for BookLevel {
    fn from(l: BookLevelResponse) -> Self {
        Self {
            price: l.price,
            volume: l.volume,
        }
    }
}

impl From<OrderBookResponse> for OrderBook {
    fn from(ob: OrderBookResponse) -> Self {
        Self {
            ticker_id: ob.ticker_id.into(),
            pool_id: ob.pool_id,
            timestamp: ob.timestamp,
            bids: ob.bids.into_iter().map(BookLevel::from).collect(),
            asks: ob.asks.into_iter().map(BookLevel::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_orderbook_conversion_keeps_order() {
        let wire: OrderBookResponse = serde_json::from_str(
            r#"{
                "ticker_id": "XCH_DBX",
                "pool_id": "c0952d9c",
                "timestamp": 1700000000000,
                "bids": [["2090", "1.5"], ["2100", "0.5"], ["2080", "2"]],
                "asks": [["2120", "1"], ["2130", "2"], ["2140", "3"]]
            }"#,
        )
        .unwrap();
        let book = OrderBook::from(wire);

        assert_eq!(book.ticker_id.as_str(), "XCH_DBX");
        assert_eq!(book.timestamp, "1700000000000");
        assert_eq!(book.bids.len(), 3);
        assert_eq!(book.asks.len(), 3);
        assert_eq!(book.bids[1].price, Decimal::from(2100));
        assert_eq!(book.best_bid().unwrap().volume, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_null_sides_are_empty() {
        let wire: OrderBookResponse =
            serde_json::from_str(r#"{"ticker_id": "A_B", "bids": null, "asks": []}"#).unwrap();
        let book = OrderBook::from(wire);
        assert!(book.is_empty());
        assert!(book.pool_id.is_empty());
    }
}
