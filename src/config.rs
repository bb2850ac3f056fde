use crate::common::{DiscoveryError, DEFAULT_DISCOVERY_ENDPOINT};
use reqwest::Url;
use std::{fmt, str::FromStr};

/// Expected number of cluster members.
/// Validated to be a positive integer, but the original text is kept verbatim,
/// as that's what goes into the `size` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCount {
    raw: String,
    value: u32,
}

impl NodeCount {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn get(&self) -> u32 {
        self.value
    }
}

impl FromStr for NodeCount {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiscoveryError::InvalidNodeCount {
            value: s.to_string(),
        };

        // u32::from_str accepts a leading '+', so check digits explicitly.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        match s.parse::<u32>() {
            Ok(value) if value > 0 => Ok(Self {
                raw: s.to_string(),
                value,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for NodeCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What to do when the discovery service replies with a non-2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Wrap whatever body came back, like a successful response.
    Permissive,
    /// Fail with `DiscoveryError::UnexpectedStatus`.
    Strict,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        StatusPolicy::Permissive
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    node_count: NodeCount,
    note: Option<String>,
    endpoint: Url,
    status_policy: StatusPolicy,
}

impl FetchConfig {
    pub fn builder(node_count: NodeCount) -> FetchConfigBuilder {
        FetchConfigBuilder::new(node_count)
    }

    pub fn node_count(&self) -> &NodeCount {
        &self.node_count
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }
}

#[derive(Debug)]
pub struct FetchConfigBuilder {
    node_count: NodeCount,
    note: Option<String>,
    endpoint: Option<String>,
    status_policy: StatusPolicy,
}

impl FetchConfigBuilder {
    pub fn new(node_count: NodeCount) -> Self {
        Self {
            node_count,
            note: None,
            endpoint: None,
            status_policy: StatusPolicy::default(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn build(self) -> Result<FetchConfig, DiscoveryError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_DISCOVERY_ENDPOINT.to_string());

        let url = Url::parse(&endpoint).map_err(|e| DiscoveryError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            error: e.to_string(),
        })?;

        // The size parameter is appended to the endpoint, so the endpoint can't carry its own query.
        if url.query().is_some() {
            return Err(DiscoveryError::InvalidEndpoint {
                endpoint,
                error: String::from("endpoint must not contain a query string"),
            });
        }

        Ok(FetchConfig {
            node_count: self.node_count,
            note: self.note,
            endpoint: url,
            status_policy: self.status_policy,
        })
    }
}
