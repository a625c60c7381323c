//! High-level client: `DexieClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::offer::client::Offers;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::pair::client::Pairs;
use crate::domain::ticker::client::Tickers;
use crate::domain::trade::client::Trades;
use crate::endpoint::Endpoint;
use crate::envelope::ApiResponse;
use crate::error::SdkError;
use crate::http::{DexieHttp, Method, Transport};

#[cfg(feature = "http")]
use crate::http::ReqwestTransport;
#[cfg(feature = "http")]
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::offer::client::Offers as OffersClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::pair::client::Pairs as PairsClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// The primary entry point for the Dexie SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.offers()`, `client.tickers()`, etc. Holds no mutable state, so
/// clones are cheap and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct DexieClient<T> {
    pub(crate) http: DexieHttp<T>,
}

impl<T: Transport> DexieClient<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            http: DexieHttp::new(base_url, transport),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn http(&self) -> &DexieHttp<T> {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn offers(&self) -> Offers<'_, T> {
        Offers { client: self }
    }

    pub fn pairs(&self) -> Pairs<'_, T> {
        Pairs { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_, T> {
        Tickers { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_, T> {
        Orderbooks { client: self }
    }

    pub fn trades(&self) -> Trades<'_, T> {
        Trades { client: self }
    }

    /// Call any path and get the decoded body back without envelope mapping.
    pub async fn raw(
        &self,
        method: Method,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<ApiResponse<serde_json::Value>, SdkError> {
        self.http.fetch(Endpoint::raw(method, path, query)).await
    }
}

#[cfg(feature = "http")]
impl DexieClient<ReqwestTransport> {
    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        DexieClientBuilder::default().base_url(base_url).build()
    }

    pub fn builder() -> DexieClientBuilder {
        DexieClientBuilder::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct DexieClientBuilder {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

#[cfg(feature = "http")]
impl Default for DexieClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }
}

#[cfg(feature = "http")]
impl DexieClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn testnet(self) -> Self {
        self.base_url(crate::network::TESTNET_API_URL)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<DexieClient<ReqwestTransport>, SdkError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("dexie-sdk/", env!("CARGO_PKG_VERSION"))),
        );
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                SdkError::Validation(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::Validation(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(crate::error::HttpError::from)?;

        Ok(DexieClient::with_transport(
            &self.base_url,
            ReqwestTransport::from_client(client),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::offer::{OfferStatus, SearchOffersParams};
    use crate::error::HttpError;
    use crate::http::{TransportRequest, TransportResponse};
    use serde_json::json;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct StubTransport {
        requests: Arc<Mutex<Vec<TransportRequest>>>,
        responses: Arc<Mutex<Vec<(u16, String)>>>,
    }

    impl StubTransport {
        fn respond(self, status: u16, body: serde_json::Value) -> Self {
            self.responses.lock().unwrap().push((status, body.to_string()));
            self
        }

        fn sent(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for StubTransport {
        fn send(
            &self,
            request: TransportRequest,
        ) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send {
            self.requests.lock().unwrap().push(request);
            let next = self.responses.lock().unwrap().pop();
            let result = match next {
                Some((status, body)) => Ok(TransportResponse {
                    status,
                    body: body.into_bytes(),
                }),
                None => Err(HttpError::Transport("no stubbed response".into())),
            };
            std::future::ready(result)
        }
    }

    fn client(stub: &StubTransport) -> DexieClient<StubTransport> {
        DexieClient::with_transport("https://dexie.test/", stub.clone())
    }

    #[test]
    fn test_search_sends_params() {
        let stub = StubTransport::default().respond(200, json!({"success": true, "offers": []}));
        let params = SearchOffersParams::new()
            .with_status(OfferStatus::Completed)
            .with_page_size(7);

        let resp = tokio_test::block_on(client(&stub).offers().search(&params)).unwrap();
        assert_eq!(resp, ApiResponse::Success(vec![]));

        let sent = stub.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://dexie.test/v1/offers");
        assert_eq!(
            sent[0].query,
            vec![("status", "4".to_string()), ("page_size", "7".to_string())]
        );
    }

    #[test]
    fn test_get_offer_not_found() {
        let stub = StubTransport::default().respond(404, json!({"success": false}));
        let resp = tokio_test::block_on(client(&stub).offers().get("missing")).unwrap();
        assert_eq!(resp, ApiResponse::NotFound);
    }

    #[test]
    fn test_status_errors() {
        let stub = StubTransport::default().respond(429, json!({"error": "slow down"}));
        let err = tokio_test::block_on(client(&stub).pairs().all()).unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::RateLimited { .. })));

        let stub = StubTransport::default().respond(502, json!({}));
        let err = tokio_test::block_on(client(&stub).tickers().all()).unwrap_err();
        match err {
            SdkError::Http(e) => assert_eq!(e.status(), Some(502)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_transport_failure_propagates() {
        let stub = StubTransport::default();
        let err = tokio_test::block_on(client(&stub).pairs().all()).unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Transport(_))));
    }

    #[test]
    fn test_post_offer() {
        let stub = StubTransport::default()
            .respond(200, json!({"success": true, "id": "abc", "known": true}));
        let resp = tokio_test::block_on(client(&stub).offers().post("offer1xyz")).unwrap();
        let posted = resp.success().unwrap();
        assert_eq!(posted.id.as_deref(), Some("abc"));

        let sent = stub.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body, Some(json!({"offer": "offer1xyz"})));
    }

    #[test]
    fn test_raw_call() {
        let body = json!({"success": true, "whatever": [1, 2, 3]});
        let stub = StubTransport::default().respond(200, body.clone());
        let resp = tokio_test::block_on(client(&stub).raw(
            Method::Get,
            "v2/experimental",
            vec![("q", "1".to_string())],
        ))
        .unwrap();
        assert_eq!(resp, ApiResponse::Success(body));
        assert_eq!(stub.sent()[0].url, "https://dexie.test/v2/experimental");
    }

    #[test]
    fn test_base_url_trimmed() {
        let stub = StubTransport::default();
        assert_eq!(client(&stub).base_url(), "https://dexie.test");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder() {
        let client = DexieClient::builder()
            .base_url("http://localhost:8080/")
            .timeout(Duration::from_secs(5))
            .header("x-client", "tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        let client = DexieClient::builder().testnet().build().unwrap();
        assert_eq!(client.base_url(), crate::network::TESTNET_API_URL);

        let default = DexieClient::new(crate::network::DEFAULT_API_URL).unwrap();
        assert_eq!(default.base_url(), "https://api.dexie.space");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_rejects_bad_header() {
        let err = DexieClient::builder()
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));

        let err = DexieClient::builder()
            .header("x-ok", "line\nbreak")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }
}
