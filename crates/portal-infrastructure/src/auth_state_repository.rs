//! Session state repository backed by client storage.
//!
//! The state is kept as one versioned JSON blob under the `auth-state` key.

use std::sync::Arc;

use async_trait::async_trait;
use version_migrate::Migrator;

use portal_core::PortalError;
use portal_core::auth::{AuthState, AuthStateRepository};
use portal_core::error::Result;
use portal_core::storage::{AUTH_STATE_KEY, ClientStorage};

use crate::dto::{AUTH_STATE_ENTITY, LEGACY_AUTH_STATE_VERSION, create_auth_state_migrator};

/// Persists [`AuthState`] through any [`ClientStorage`].
pub struct KeyValueAuthStateRepository {
    storage: Arc<dyn ClientStorage>,
    migrator: Migrator,
}

impl KeyValueAuthStateRepository {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            storage,
            migrator: create_auth_state_migrator(),
        }
    }
}

#[async_trait]
impl AuthStateRepository for KeyValueAuthStateRepository {
    async fn load(&self) -> Result<Option<AuthState>> {
        let Some(content) = self.storage.get_item(AUTH_STATE_KEY).await? else {
            return Ok(None);
        };

        let mut json_value: serde_json::Value = serde_json::from_str(&content)?;

        // Blobs from before versioning carry no version field.
        if let Some(object) = json_value.as_object_mut() {
            object
                .entry("version")
                .or_insert_with(|| LEGACY_AUTH_STATE_VERSION.into());
        }

        let state: AuthState = self.migrator.load_flat_from(AUTH_STATE_ENTITY, json_value)?;

        if !state.is_consistent() {
            return Err(PortalError::Serialization {
                format: "JSON".to_string(),
                message: "auth state is neither fully signed in nor fully signed out".to_string(),
            });
        }

        Ok(Some(state))
    }

    async fn save(&self, state: &AuthState) -> Result<()> {
        let serialized = self
            .migrator
            .save_domain_flat(AUTH_STATE_ENTITY, state.clone())?;
        self.storage.set_item(AUTH_STATE_KEY, &serialized).await
    }

    async fn clear(&self) -> Result<()> {
        self.storage.remove_item(AUTH_STATE_KEY).await
    }
}
