//! Shared newtypes, serde helpers and offer id utilities.
//!
//! `TickerId` and `Side` serialize exactly as the service spells them.

pub mod offer_id;
pub mod serde_util;

pub use offer_id::{is_offer_id, offer_id, offer_id_from_str, verify_offer_id};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::SdkError;

// ─── TickerId ────────────────────────────────────────────────────────────────

/// Newtype for trading pair identifiers (e.g. `"XCH_DBX"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerId(String);

impl TickerId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TickerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TickerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for TickerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TickerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TickerId(s))
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Trade side as reported by the price endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(SdkError::Validation(format!(
                "trade side must be \"buy\" or \"sell\", got {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_id_serde() {
        let id = TickerId::from("XCH_DBX");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"XCH_DBX\"");
        let back: TickerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_side_serde() {
        let buy: Side = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, Side::Buy);
        let sell: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(sell, Side::Sell);
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert!("hold".parse::<Side>().is_err());
    }
}
