#![allow(dead_code)]

pub mod stub;

use etcd_discovery_url::{FetchConfig, StatusPolicy};
use stub::DiscoveryStub;

pub const DISCOVERY_URL: &str = "https://discovery.etcd.io/abc123";

impl DiscoveryStub {
    // Helper function to generate fetch config pointing to this stub.
    pub fn fetch_config(&self, node_count: &str, policy: StatusPolicy) -> FetchConfig {
        FetchConfig::builder(node_count.parse().unwrap())
            .with_endpoint(self.endpoint())
            .with_status_policy(policy)
            .build()
            .unwrap()
    }
}

/// Log line must look like "<YYYYMMDD> <HH:MM:SS AM/PM> <message>".
pub fn assert_log_line(line: &str) {
    let mut parts = line.splitn(4, ' ');
    let date = parts.next().unwrap_or_default();
    let time = parts.next().unwrap_or_default();
    let meridiem = parts.next().unwrap_or_default();

    assert!(
        date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()),
        "Log line must start with YYYYMMDD: '{}'",
        line
    );
    assert!(
        time.len() == 8 && time.as_bytes()[2] == b':' && time.as_bytes()[5] == b':',
        "Log line must carry HH:MM:SS: '{}'",
        line
    );
    assert!(
        meridiem == "AM" || meridiem == "PM",
        "Log line must carry AM/PM: '{}'",
        line
    );
}
