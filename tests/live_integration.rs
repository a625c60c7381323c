//! Live tests against the Dexie API.
//!
//! Run with `--features live_tests`. Targets mainnet unless `DEXIE_API_URL`
//! is set.

#![cfg(feature = "live_tests")]

use dexie_sdk::prelude::*;

fn get_client() -> DexieClient<ReqwestTransport> {
    let url = std::env::var("DEXIE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    DexieClient::new(&url).unwrap()
}

#[tokio::test]
async fn test_live_search_offers() {
    let offers = get_client()
        .offers()
        .search(&SearchOffersParams::new().with_page_size(7))
        .await
        .unwrap()
        .success()
        .expect("search was unsuccessful");
    assert_eq!(offers.len(), 7);
}

#[tokio::test]
async fn test_live_get_offer() {
    let offer = get_client()
        .offers()
        .get("HR7aHbCXsJto7iS9uBkiiGJx6iGySxoNqUGQvrZfnj6B")
        .await
        .unwrap()
        .success()
        .expect("offer not found");
    assert_eq!(offer.status(), OfferStatus::Completed);
}

#[tokio::test]
async fn test_live_pairs() {
    let pairs = get_client().pairs().all().await.unwrap().success().unwrap();
    assert!(!pairs.is_empty());
}

#[tokio::test]
async fn test_live_tickers() {
    let tickers = get_client()
        .tickers()
        .get("XCH_DBX")
        .await
        .unwrap()
        .success()
        .unwrap();
    let ticker = &tickers[0];
    assert!(!ticker.last_price.is_zero());
    assert!(!ticker.pool_id.is_empty());
}

#[tokio::test]
async fn test_live_orderbook() {
    let book = get_client()
        .orderbooks()
        .get("XCH_DBX", Some(6))
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(book.bids.len(), 3);
}

#[tokio::test]
async fn test_live_historical_trades() {
    let history = get_client()
        .trades()
        .historical(&HistoricalTradesParams::new("XCH_DBX").with_limit(3))
        .await
        .unwrap()
        .success()
        .unwrap();
    assert_eq!(history.len(), 3);
}
