mod common;
mod http;

pub use common::{TransportError, TransportResponse};
pub use http::HttpTransport;

use reqwest::Url;

/// Single-shot GET against the discovery service.
#[async_trait::async_trait]
pub trait DiscoveryTransport: Send + Sync {
    /// Issue one GET to `endpoint` with `query` appended, and hand back the
    /// status and body whatever the status is.
    async fn get(
        &self,
        endpoint: &Url,
        query: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError>;
}
