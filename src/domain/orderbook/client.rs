//! Order books sub-client: depth snapshots.

use crate::client::DexieClient;
use crate::domain::orderbook::OrderBook;
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::SdkError;
use crate::http::Transport;

pub struct Orderbooks<'a, T> {
    pub(crate) client: &'a DexieClient<T>,
}

impl<'a, T: Transport> Orderbooks<'a, T> {
    /// Order book for `ticker_id`.
    ///
    /// `depth` counts levels across both sides (`100` is 50 bids and 50 asks).
    /// `None` or `Some(0)` returns the full book.
    pub async fn get(
        &self,
        ticker_id: &str,
        depth: Option<u32>,
    ) -> Result<ApiResponse<OrderBook>, SdkError> {
        self.client
            .http
            .fetch(Endpoint::orderbook(ticker_id, depth))
            .await
    }
}
