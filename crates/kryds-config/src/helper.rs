use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    10
}

fn default_danish_url() -> String {
    "https://krydsordexperten.dk".to_string()
}

/// Outbound lookups against the crossword-solution sites
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Per-request timeout; expiry counts as a network failure
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_danish_url")]
    pub danish_url: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            danish_url: default_danish_url(),
        }
    }
}

impl HelperConfig {
    pub fn new() -> Self {
        let timeout_secs = env::var("KRYDS_HELP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        let danish_url = env::var("KRYDS_DANISH_URL").unwrap_or_else(|_| default_danish_url());

        Self {
            timeout_secs,
            danish_url,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
