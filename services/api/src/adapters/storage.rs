//! services/api/src/adapters/storage.rs
//!
//! This module contains the storage adapter, the concrete implementation of
//! the `KeyValueStore` port from the core crate. The platform persists only
//! local demo state (session, last viewed ad, drafts), so the store is a
//! process-local map rather than a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use adboard_core::ports::{KeyValueStore, PortResult};

/// An in-process key-value store. Contents live for the lifetime of the
/// process and are scoped to a single user.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> PortResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
