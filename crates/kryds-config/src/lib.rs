use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::helper::HelperConfig;
use self::server::ServerConfig;
use self::storage::StorageConfig;

pub mod helper;
pub mod server;
pub mod storage;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub helper: HelperConfig,

    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            helper: HelperConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `KRYDS_*` environment variables
    pub fn new() -> Self {
        let log_level = env::var("KRYDS_LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        Config {
            server: ServerConfig::new(),
            storage: StorageConfig::new(),
            helper: HelperConfig::new(),
            log_level,
        }
    }

    /// Load a JSON profile; missing sections fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
