//! Identity provider trait.
//!
//! The provider verifies credentials and reports the user's attributes. Its
//! internal protocol is opaque to the portal; implementations live in the
//! infrastructure crate.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::model::LoginCredentials;

/// Tokens issued by the provider for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub access_token: String,
    pub id_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// A provider-side session: the tokens plus the raw attribute bag.
///
/// Attributes are decoded into a [`super::User`] with
/// [`super::decode_user`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub username: String,
    pub tokens: TokenSet,
    pub attributes: HashMap<String, String>,
}

impl ProviderSession {
    /// Token the portal keeps in its session state.
    pub fn session_token(&self) -> &str {
        &self.tokens.id_token
    }
}

/// An abstract identity provider.
///
/// # Implementation Notes
///
/// - `authenticate` must not have side effects on failure.
/// - `current_session` returns `Ok(None)` when there is no provider-side
///   session to resume, and `Err(_)` when one exists but cannot be validated.
/// - `sign_out` is called best-effort; callers ignore its error.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies the credentials and opens a provider-side session.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<ProviderSession, ProviderError>;

    /// Returns the live provider-side session, if one exists and is valid.
    async fn current_session(&self) -> Result<Option<ProviderSession>, ProviderError>;

    /// Invalidates the provider-side session.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
