//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and request parameters
//! - `wire.rs`: Raw serde structs matching service responses
//! - `convert.rs`: `From`/`TryFrom` conversions from wire to domain types
//! - `client.rs`: Sub-client methods

pub mod offer;
pub mod orderbook;
pub mod pair;
pub mod ticker;
pub mod trade;
