//! Record store port
//!
//! Named collections of records, loaded and saved whole.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by a record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on collection '{collection}': {source}")]
    Io {
        collection: String,
        #[source]
        source: std::io::Error,
    },

    #[error("collection '{collection}' is corrupt: {message}")]
    Corrupt { collection: String, message: String },
}

/// Load/save pair over named collections.
///
/// Loading a collection that does not exist yields an empty list. Saving
/// overwrites the whole collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load<T>(&self, collection: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send;

    async fn save<T>(&self, collection: &str, records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync;
}
