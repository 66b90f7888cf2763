//! One pretty-printed JSON array per collection: `{data_dir}/{collection}.json`.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use taskmate_application::{RecordStore, StoreError};
use tracing::debug;

/// Flat-file record store.
///
/// Each load/save reads or rewrites the whole file. There is no locking; one
/// assistant session is assumed to own the directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`. The directory is created on the
    /// first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing `collection`
    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}

fn io_error(collection: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        collection: collection.to_string(),
        source,
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load<T>(&self, collection: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        let path = self.path_for(collection);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Collection file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_error(collection, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            collection: collection.to_string(),
            message: e.to_string(),
        })
    }

    async fn save<T>(&self, collection: &str, records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let content = serde_json::to_string_pretty(records).map_err(|e| StoreError::Corrupt {
            collection: collection.to_string(),
            message: e.to_string(),
        })?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| io_error(collection, e))?;

        let path = self.path_for(collection);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| io_error(collection, e))?;
        debug!(path = %path.display(), count = records.len(), "Saved collection");
        Ok(())
    }
}
