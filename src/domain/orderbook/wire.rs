//! Wire types for the order book endpoint.

use crate::shared::serde_util::{self, null_to_default, LenientDecimal};
use rust_decimal::Decimal;
use serde::de::{self, value::MapAccessDeserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// REST representation of an order book.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderBookResponse {
    #[serde(default)]
    pub ticker_id: String,
    #[serde(default)]
    pub pool_id: String,
    #[serde(default, deserialize_with = "serde_util::text::deserialize")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub bids: Vec<BookLevelResponse>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub asks: Vec<BookLevelResponse>,
}

/// A single level, sent either as `[price, volume]` or as an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLevelResponse {
    pub price: Decimal,
    pub volume: Decimal,
}

#[derive(Deserialize)]
struct LevelObject {
    price: LenientDecimal,
    #[serde(alias = "quantity", alias = "amount")]
    volume: LenientDecimal,
}

struct LevelVisitor;

impl<'de> Visitor<'de> for LevelVisitor {
    type Value = BookLevelResponse;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a [price, volume] pair or a {price, volume} object")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<BookLevelResponse, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let price: LenientDecimal = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let volume: LenientDecimal = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(BookLevelResponse {
            price: price.0,
            volume: volume.0,
        })
    }

    fn visit_map<A>(self, map: A) -> Result<BookLevelResponse, A::Error>
    where
        A: MapAccess<'de>,
    {
        let level = LevelObject::deserialize(MapAccessDeserializer::new(map))?;
        Ok(BookLevelResponse {
            price: level.price.0,
            volume: level.volume.0,
        })
    }
}

impl<'de> Deserialize<'de> for BookLevelResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LevelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_level_shapes() {
        let levels: Vec<BookLevelResponse> = serde_json::from_str(
            r#"[["2100.5", "0.25"], [2099, 1, "extra"], {"price": "2098", "volume": 3},
                {"price": 2097.5, "quantity": "4"}]"#,
        )
        .unwrap();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0].price, Decimal::from_str("2100.5").unwrap());
        assert_eq!(levels[0].volume, Decimal::from_str("0.25").unwrap());
        assert_eq!(levels[1].price, Decimal::from(2099));
        assert_eq!(levels[2].volume, Decimal::from(3));
        assert_eq!(levels[3].price, Decimal::from_str("2097.5").unwrap());
        assert_eq!(levels[3].volume, Decimal::from(4));
    }

    #[test]
    fn test_short_level_rejected() {
        assert!(serde_json::from_str::<BookLevelResponse>(r#"["1"]"#).is_err());
        assert!(serde_json::from_str::<BookLevelResponse>(r#""1""#).is_err());
    }
}
