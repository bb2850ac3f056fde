use crate::transport::{
    common::{ClientBuild, ReadBody, SendRequest},
    DiscoveryTransport, TransportError, TransportResponse,
};
use reqwest::{Client, Url};
use snafu::ResultExt;

/// reqwest-backed transport. No request timeout is configured: the call
/// waits until the server answers or the network stack gives up.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build().context(ClientBuild {})?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl DiscoveryTransport for HttpTransport {
    async fn get(
        &self,
        endpoint: &Url,
        query: &[(&str, &str)],
    ) -> Result<TransportResponse, TransportError> {
        let url = endpoint.to_string();

        let response = self
            .client
            .get(endpoint.clone())
            .query(query)
            .send()
            .await
            .context(SendRequest { url: url.clone() })?;

        let status = response.status().as_u16();
        tracing::debug!("Discovery service {} replied with status {}", url, status);

        let body = response.text().await.context(ReadBody { url })?;
        Ok(TransportResponse::new(status, body))
    }
}
