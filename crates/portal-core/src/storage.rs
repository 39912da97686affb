//! Client-side key-value storage.
//!
//! Stands in for the browser's local storage: string values under string
//! keys, read and written whole.

use async_trait::async_trait;

use crate::error::Result;

/// Key under which the session state blob is stored.
pub const AUTH_STATE_KEY: &str = "auth-state";

/// An abstract client-side key-value store.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
