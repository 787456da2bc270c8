use std::path::{Path, PathBuf};

use kryds_config::storage::StorageConfig;
use serde_json::{Value, json};
use tokio::fs;
use tokio::sync::Mutex;

/// Grid and dictionary documents on disk.
///
/// Contents are opaque JSON owned by the editor; this only reads and writes them.
pub struct Storage {
    grid_path: PathBuf,
    dictionary_path: PathBuf,
    write_lock: Mutex<()>,
}

impl Storage {
    /// Create the data dir and seed missing files with a blank grid and an empty dictionary
    pub async fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.data_dir)
            .await
            .map_err(|source| StorageError::io(&config.data_dir, source))?;

        let storage = Self {
            grid_path: config.grid_path(),
            dictionary_path: config.dictionary_path(),
            write_lock: Mutex::new(()),
        };

        if !exists(&storage.grid_path).await? {
            tracing::info!("Creating blank grid at {}", storage.grid_path.display());
            write_json(&storage.grid_path, &blank_grid(config.grid_rows, config.grid_cols)).await?;
        }

        if !exists(&storage.dictionary_path).await? {
            tracing::info!("Creating empty dictionary at {}", storage.dictionary_path.display());
            write_json(&storage.dictionary_path, &json!([])).await?;
        }

        Ok(storage)
    }

    pub fn grid_path(&self) -> &Path {
        &self.grid_path
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary_path
    }

    pub async fn load_grid(&self) -> Result<Value, StorageError> {
        read_json(&self.grid_path).await
    }

    pub async fn save_grid(&self, grid: &Value) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        write_json(&self.grid_path, grid).await
    }

    pub async fn load_dictionary(&self) -> Result<Value, StorageError> {
        read_json(&self.dictionary_path).await
    }

    pub async fn save_dictionary(&self, dictionary: &Value) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        write_json(&self.dictionary_path, dictionary).await
    }
}

/// `rows` x `cols` of empty cells
pub fn blank_grid(rows: usize, cols: usize) -> Value {
    let row: Vec<Value> = (0..cols)
        .map(|_| json!({ "type": "empty", "data": "" }))
        .collect();
    Value::Array(vec![Value::Array(row); rows])
}

/// Unreadable paths are errors, never "missing", so seeding cannot clobber them
async fn exists(path: &Path) -> Result<bool, StorageError> {
    fs::try_exists(path)
        .await
        .map_err(|source| StorageError::io(path, source))
}

async fn read_json(path: &Path) -> Result<Value, StorageError> {
    let data = fs::read(path)
        .await
        .map_err(|source| StorageError::io(path, source))?;
    Ok(serde_json::from_slice(&data)?)
}

/// Write through a sibling temp file so a crash never leaves half a document
async fn write_json(path: &Path, value: &Value) -> Result<(), StorageError> {
    let data = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");

    fs::write(&tmp, data)
        .await
        .map_err(|source| StorageError::io(&tmp, source))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|source| StorageError::io(path, source))?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
