//! Low-level HTTP client: `DexieHttp`.
//!
//! Executes any [`Endpoint`] against the base URL: sends it through the
//! [`Transport`], maps non-2xx statuses to [`HttpError`], and runs the body
//! through the envelope mapper. No retries.

use crate::endpoint::Endpoint;
use crate::envelope::{map_response, ApiResponse, FromPayload, Payload};
use crate::error::{HttpError, SdkError};
use crate::http::transport::{Transport, TransportRequest};

/// Low-level client for the Dexie REST API.
#[derive(Debug, Clone)]
pub struct DexieHttp<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> DexieHttp<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `endpoint` and map the response envelope.
    pub async fn execute(&self, endpoint: Endpoint) -> Result<ApiResponse<Payload>, SdkError> {
        let Endpoint {
            method,
            path,
            query,
            body,
            kind,
        } = endpoint;
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(%method, %url, query = query.len(), "Sending request");
        let response = self
            .transport
            .send(TransportRequest {
                method,
                url,
                query,
                body,
            })
            .await?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "Received response"
        );

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            return Err(HttpError::from_status(response.status, body).into());
        }

        map_response(kind, &response.body)
    }

    /// Execute and extract the typed payload.
    pub async fn fetch<R: FromPayload>(
        &self,
        endpoint: Endpoint,
    ) -> Result<ApiResponse<R>, SdkError> {
        self.execute(endpoint).await?.try_map(R::from_payload)
    }
}
