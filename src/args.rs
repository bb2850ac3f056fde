use clap::Parser;
use etcd_discovery_url::{
    DiscoveryError, FetchConfig, NodeCount, StatusPolicy, DEFAULT_DISCOVERY_ENDPOINT,
    DEFAULT_LOG_FILE,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "etcd-discovery-url")]
#[command(
    about = "Request a new etcd discovery URL and print it as JSON",
    long_about = None
)]
pub struct Args {
    /// Expected number of cluster members, sent verbatim as 'size'
    pub node_count: NodeCount,

    /// Free-form note recorded in the invocation log (with --log)
    pub note: Option<String>,

    /// Append invocation details to the log file before the request
    #[arg(long)]
    pub log: bool,

    /// Invocation log file
    #[arg(long, env = "ETCD_DISCOVERY_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Discovery service endpoint
    #[arg(long, env = "ETCD_DISCOVERY_ENDPOINT", default_value = DEFAULT_DISCOVERY_ENDPOINT)]
    pub endpoint: String,

    /// Fail when the discovery service responds with a non-success status
    #[arg(long)]
    pub strict_status: bool,
}

impl Args {
    pub fn to_config(&self) -> Result<FetchConfig, DiscoveryError> {
        let policy = if self.strict_status {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Permissive
        };

        let mut builder = FetchConfig::builder(self.node_count.clone())
            .with_endpoint(self.endpoint.as_str())
            .with_status_policy(policy);

        if let Some(note) = &self.note {
            builder = builder.with_note(note.as_str());
        }

        builder.build()
    }
}
