//! Pairs sub-client.

use crate::client::DexieClient;
use crate::domain::pair::TradingPair;
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::SdkError;
use crate::http::Transport;

pub struct Pairs<'a, T> {
    pub(crate) client: &'a DexieClient<T>,
}

impl<'a, T: Transport> Pairs<'a, T> {
    /// All traded pairs.
    pub async fn all(&self) -> Result<ApiResponse<Vec<TradingPair>>, SdkError> {
        self.client.http.fetch(Endpoint::pairs()).await
    }
}
