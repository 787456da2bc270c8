use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_grid_file() -> String {
    "grid.json".to_string()
}

fn default_dictionary_file() -> String {
    "dict.json".to_string()
}

fn default_grid_rows() -> usize {
    10
}

fn default_grid_cols() -> usize {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the grid and dictionary files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_grid_file")]
    pub grid_file: String,
    #[serde(default = "default_dictionary_file")]
    pub dictionary_file: String,
    /// Size of the blank grid written on first run
    #[serde(default = "default_grid_rows")]
    pub grid_rows: usize,
    #[serde(default = "default_grid_cols")]
    pub grid_cols: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            grid_file: default_grid_file(),
            dictionary_file: default_dictionary_file(),
            grid_rows: default_grid_rows(),
            grid_cols: default_grid_cols(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("KRYDS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            ..Self::default()
        }
    }

    pub fn grid_path(&self) -> PathBuf {
        self.data_dir.join(&self.grid_file)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.data_dir.join(&self.dictionary_file)
    }
}
