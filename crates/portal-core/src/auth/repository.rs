//! Auth state repository trait.

use async_trait::async_trait;

use super::model::AuthState;
use crate::error::Result;

/// Repository for the persisted session state.
#[async_trait]
pub trait AuthStateRepository: Send + Sync {
    /// Loads the persisted state.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(state))`: A state was stored and decoded
    /// - `Ok(None)`: Nothing is stored
    /// - `Err(e)` with `e.is_corrupt_data()`: Stored bytes could not be decoded
    /// - `Err(_)`: Storage could not be read
    async fn load(&self) -> Result<Option<AuthState>>;

    /// Replaces the persisted state.
    async fn save(&self, state: &AuthState) -> Result<()>;

    /// Removes the persisted state. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<()>;
}
