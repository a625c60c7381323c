//! Tickers sub-client: market and price data.

use crate::client::DexieClient;
use crate::domain::ticker::Ticker;
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::SdkError;
use crate::http::Transport;

pub struct Tickers<'a, T> {
    pub(crate) client: &'a DexieClient<T>,
}

impl<'a, T: Transport> Tickers<'a, T> {
    /// Tickers for every pair.
    pub async fn all(&self) -> Result<ApiResponse<Vec<Ticker>>, SdkError> {
        self.client.http.fetch(Endpoint::tickers(None)).await
    }

    /// Tickers filtered to one `ticker_id` from the pairs list.
    pub async fn get(&self, ticker_id: &str) -> Result<ApiResponse<Vec<Ticker>>, SdkError> {
        self.client.http.fetch(Endpoint::tickers(Some(ticker_id))).await
    }
}
