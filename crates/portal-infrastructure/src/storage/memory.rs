//! In-memory client storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use portal_core::error::Result;
use portal_core::storage::ClientStorage;

/// Client storage that lives only as long as the process. Used in tests and
/// for throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryClientStorage {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryClientStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStorage for InMemoryClientStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items.lock().await.remove(key);
        Ok(())
    }
}
