//! HTTP layer: transport trait and the `DexieHttp` request executor.

pub mod client;
pub mod transport;

pub use client::DexieHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Method, Transport, TransportRequest, TransportResponse};
