//! In-memory doubles shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::record_store::{RecordStore, StoreError};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Record store backed by a map of JSON values.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, collection: &str) -> Option<serde_json::Value> {
        self.collections.lock().unwrap().get(collection).cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load<T>(&self, collection: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        let value = self.collections.lock().unwrap().get(collection).cloned();
        match value {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| StoreError::Corrupt {
                collection: collection.to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn save<T>(&self, collection: &str, records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(records).map_err(|e| StoreError::Corrupt {
            collection: collection.to_string(),
            message: e.to_string(),
        })?;
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), value);
        Ok(())
    }
}

/// Record store whose disk is always on fire.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn load<T>(&self, collection: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned + Send,
    {
        Err(StoreError::Io {
            collection: collection.to_string(),
            source: std::io::Error::other("disk unavailable"),
        })
    }

    async fn save<T>(&self, collection: &str, _records: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        Err(StoreError::Io {
            collection: collection.to_string(),
            source: std::io::Error::other("disk unavailable"),
        })
    }
}

/// Gateway that replays canned replies and records every prompt.
pub struct MockGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: GatewayError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::InvalidResponse("no more replies".into())))
    }

    fn model(&self) -> &str {
        "mock"
    }
}
