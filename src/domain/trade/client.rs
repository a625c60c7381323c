//! Trades sub-client: historical trades.

use crate::client::DexieClient;
use crate::domain::trade::{HistoricalTrade, HistoricalTradesParams, Trade};
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::SdkError;
use crate::http::Transport;

pub struct Trades<'a, T> {
    pub(crate) client: &'a DexieClient<T>,
}

impl<'a, T: Transport> Trades<'a, T> {
    /// Historical trades with the response header (`ticker_id`, `pool_id`,
    /// `timestamp`).
    pub async fn historical(
        &self,
        params: &HistoricalTradesParams,
    ) -> Result<ApiResponse<HistoricalTrade>, SdkError> {
        self.client
            .http
            .fetch(Endpoint::historical_trades(params))
            .await
    }

    /// Only the `trades` list of the historical trades response.
    #[deprecated(note = "drops the response header; use `historical` instead")]
    pub async fn list(
        &self,
        params: &HistoricalTradesParams,
    ) -> Result<ApiResponse<Vec<Trade>>, SdkError> {
        #[allow(deprecated)]
        let endpoint = Endpoint::trade_list(params);
        self.client.http.fetch(endpoint).await
    }
}
