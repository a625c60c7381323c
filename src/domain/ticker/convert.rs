//! Conversions from wire types to domain types for tickers.

use super::wire::TickerResponse;
use super::Ticker;

impl From<TickerResponse> for Ticker {
    fn from(t: TickerResponse) -> Self {
        Self {
            ticker_id: t.ticker_id.into(),
            base_currency: t.base_currency,
            target_currency: t.target_currency,
            last_price: t.last_price,
            current_avg_price: t.current_avg_price,
            base_volume: t.base_volume,
            target_volume: t.target_volume,
            pool_id: t.pool_id,
            bid: t.bid,
            ask: t.ask,
            high: t.high,
            low: t.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ticker_conversion() {
        let wire: TickerResponse = serde_json::from_str(
            r#"{
                "ticker_id": "XCH_DBX",
                "base_currency": "xch",
                "target_currency": "db1a9020d48d9d4ad22631b66ab4b9ebd3637ef7758ad38881348c5d24c38f20",
                "last_price": "2113.712",
                "current_avg_price": 2101.5,
                "base_volume": "12.345",
                "target_volume": "26094.17",
                "pool_id": "c0952d9c",
                "bid": "2090.1",
                "ask": "2120.4",
                "high": "2200",
                "low": null
            }"#,
        )
        .unwrap();

        let ticker = Ticker::from(wire);
        assert_eq!(ticker.ticker_id.as_str(), "XCH_DBX");
        assert_eq!(ticker.last_price, dec("2113.712"));
        assert_eq!(ticker.current_avg_price, Some(dec("2101.5")));
        assert_eq!(ticker.base_volume, dec("12.345"));
        assert_eq!(ticker.target_volume, dec("26094.17"));
        assert_eq!(ticker.high, Some(dec("2200")));
        assert_eq!(ticker.low, None);
        assert_eq!(ticker.spread(), Some(dec("30.3")));
    }

    #[test]
    fn test_spread_needs_both_sides() {
        let wire: TickerResponse = serde_json::from_str(
            r#"{"ticker_id": "A_B", "base_currency": "a", "target_currency": "b",
                "last_price": "1", "bid": "0.9"}"#,
        )
        .unwrap();
        let ticker = Ticker::from(wire);
        assert_eq!(ticker.spread(), None);
        assert_eq!(ticker.base_volume, Decimal::ZERO);
    }
}
