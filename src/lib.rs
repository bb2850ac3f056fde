mod common;
mod config;
mod fetcher;
mod journal;
mod output;
pub mod transport;

pub use common::{
    DiscoveryError, DEFAULT_DISCOVERY_ENDPOINT, DEFAULT_LOG_FILE, DISCOVERY_URL_KEY,
    SIZE_QUERY_PARAM,
};

pub use config::{FetchConfig, FetchConfigBuilder, NodeCount, StatusPolicy};

pub use fetcher::DiscoveryUrlFetcher;

pub use journal::InvocationLog;

pub use output::DiscoveryOutput;
