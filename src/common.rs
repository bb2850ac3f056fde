use crate::transport::TransportError;
use snafu::Snafu;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum DiscoveryError {
    /// Node count is not a positive integer.
    #[snafu(display("Invalid node count '{}': expected a positive integer", value))]
    InvalidNodeCount { value: String },

    /// Discovery endpoint can't be parsed as URL.
    #[snafu(display("Invalid discovery endpoint '{}': {}", endpoint, error))]
    InvalidEndpoint { endpoint: String, error: String },

    /// Can't initialize HTTP client.
    #[snafu(display("Failed to initialize HTTP client. Error={}", source))]
    HttpClient { source: TransportError },

    /// Request to the discovery service did not complete.
    #[snafu(display(
        "Failed to request discovery URL from {}. Error={}",
        endpoint,
        source
    ))]
    Request {
        endpoint: String,
        source: TransportError,
    },

    /// Discovery service replied with non-success status (strict policy only).
    #[snafu(display(
        "Discovery service {} responded with status {}: '{}'",
        endpoint,
        status,
        body
    ))]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Can't open invocation log file.
    #[snafu(display("Failed to open invocation log {}. Error={}", path.display(), source))]
    LogOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Can't append to invocation log.
    #[snafu(display("Failed to write invocation log {}. Error={}", target, source))]
    LogWrite {
        target: String,
        source: std::io::Error,
    },

    /// Failed to serialize the output record.
    #[snafu(display("Failed to serialize discovery output. Error={}", source))]
    SerializeOutput { source: serde_json::Error },
}

/// Public etcd discovery service.
pub const DEFAULT_DISCOVERY_ENDPOINT: &str = "https://discovery.etcd.io/new";

/// Query parameter carrying the expected cluster size.
pub const SIZE_QUERY_PARAM: &str = "size";

/// The only key of the printed JSON object.
pub const DISCOVERY_URL_KEY: &str = "etcd_discovery_url";

/// Invocation log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "etcd3-discovery-url.log";

/// `<YYYYMMDD> <HH:MM:SS AM/PM>`
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y%m%d %I:%M:%S %p";
