//! Network URL constants for the Dexie SDK.

/// Default REST API base URL (mainnet).
pub const DEFAULT_API_URL: &str = "https://api.dexie.space";

/// Testnet REST API base URL.
pub const TESTNET_API_URL: &str = "https://api-testnet.dexie.space";
