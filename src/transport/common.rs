use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility = "pub")]
pub enum TransportError {
    /// Failed to construct HTTP client.
    #[snafu(display("Failed to build HTTP client. Error={}", source))]
    ClientBuild { source: reqwest::Error },

    /// Request could not be sent or no response arrived (DNS, connect, TLS...).
    #[snafu(display("Failed to send GET request to '{}'. Error={}", url, source))]
    SendRequest { url: String, source: reqwest::Error },

    /// Response arrived but its body could not be read.
    #[snafu(display("Failed to read response body from '{}'. Error={}", url, source))]
    ReadBody { url: String, source: reqwest::Error },
}

/// Raw reply of the discovery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
