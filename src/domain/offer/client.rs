//! Offers sub-client: post, search and inspect offers.

use crate::client::DexieClient;
use crate::domain::offer::wire::PostOfferResponse;
use crate::domain::offer::{Offer, SearchOffersParams};
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::{HttpError, SdkError};
use crate::http::Transport;

pub struct Offers<'a, T> {
    pub(crate) client: &'a DexieClient<T>,
}

impl<'a, T: Transport> Offers<'a, T> {
    /// Post an offer file.
    pub async fn post(&self, offer: &str) -> Result<ApiResponse<PostOfferResponse>, SdkError> {
        self.client.http.fetch(Endpoint::post_offer(offer)).await
    }

    /// Search offers. Call with default params to get the latest offers.
    pub async fn search(
        &self,
        params: &SearchOffersParams,
    ) -> Result<ApiResponse<Vec<Offer>>, SdkError> {
        self.client.http.fetch(Endpoint::search_offers(params)).await
    }

    /// Inspect one offer by its id (see [`offer_id`](crate::shared::offer_id())).
    ///
    /// An unknown id yields [`ApiResponse::NotFound`] rather than an error.
    pub async fn get(&self, id: &str) -> Result<ApiResponse<Offer>, SdkError> {
        match self.client.http.fetch(Endpoint::get_offer(id)).await {
            Err(SdkError::Http(HttpError::NotFound(body))) => {
                tracing::debug!(offer_id = id, body = %body, "Offer not found");
                Ok(ApiResponse::NotFound)
            }
            other => other,
        }
    }
}
