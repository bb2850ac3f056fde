use crate::{
    common::{HttpClient, Request, SIZE_QUERY_PARAM},
    config::{FetchConfig, StatusPolicy},
    journal::InvocationLog,
    transport::{DiscoveryTransport, HttpTransport},
    DiscoveryError, DiscoveryOutput,
};
use snafu::ResultExt;
use std::io::Write;
use tracing::instrument;

/// Obtains a fresh etcd discovery URL for a given cluster size.
///
/// Every call performs exactly one request: no retries, no caching.
pub struct DiscoveryUrlFetcher<T = HttpTransport> {
    transport: T,
}

impl DiscoveryUrlFetcher<HttpTransport> {
    /// Fetcher talking HTTP(S) to the configured endpoint.
    pub fn new() -> Result<Self, DiscoveryError> {
        let transport = HttpTransport::new().context(HttpClient {})?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: DiscoveryTransport> DiscoveryUrlFetcher<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Request a discovery URL and wrap the response body into the output record.
    #[instrument(level = "debug", skip(self, config), fields(size = %config.node_count()), err)]
    pub async fn fetch(&self, config: &FetchConfig) -> Result<DiscoveryOutput, DiscoveryError> {
        let endpoint = config.endpoint();
        let query = [(SIZE_QUERY_PARAM, config.node_count().as_str())];

        let response = self
            .transport
            .get(endpoint, &query)
            .await
            .context(Request {
                endpoint: endpoint.to_string(),
            })?;

        if !response.is_success() {
            match config.status_policy() {
                StatusPolicy::Strict => {
                    return Err(DiscoveryError::UnexpectedStatus {
                        endpoint: endpoint.to_string(),
                        status: response.status,
                        body: response.body,
                    });
                }
                StatusPolicy::Permissive => {
                    tracing::warn!(
                        "Discovery service {} responded with status {}, using response body as is",
                        endpoint,
                        response.status,
                    );
                }
            }
        }

        Ok(DiscoveryOutput::new(response.body))
    }

    /// Same as `fetch`, but first records the invocation into the log.
    /// The log lines are written before the request, so they are kept even
    /// if the request fails.
    pub async fn fetch_logged<W: Write>(
        &self,
        config: &FetchConfig,
        journal: &mut InvocationLog<W>,
    ) -> Result<DiscoveryOutput, DiscoveryError> {
        journal.record_invocation(config.node_count(), config.note())?;
        log::debug!("Invocation recorded in {}", journal.target());

        self.fetch(config).await
    }
}
