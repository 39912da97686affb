//! Demo allow-list identity provider.
//!
//! Checks credentials against a fixed in-process directory. Only for demos
//! and local development; selected when no managed provider is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use portal_core::auth::{
    ATTR_CREATED_AT, ATTR_EMAIL, ATTR_FAMILY_NAME, ATTR_GIVEN_NAME, ATTR_IS_ACTIVE, ATTR_ROLE,
    ATTR_SUB, IdentityProvider, LoginCredentials, ProviderError, ProviderSession, TokenSet, User,
};

use crate::seed::demo_accounts;

/// A directory entry: the user record and the password it accepts.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub user: User,
    pub password: String,
}

/// Identity provider over an in-memory account list.
///
/// Issues tokens of the form `token-{user id}-{unix millis}`. The session
/// lives only as long as this value.
pub struct DemoDirectoryProvider {
    accounts: Vec<DemoAccount>,
    session: Mutex<Option<ProviderSession>>,
}

impl DemoDirectoryProvider {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        warn!(
            accounts = accounts.len(),
            "Using the demo account directory; do not use outside development"
        );
        Self {
            accounts,
            session: Mutex::new(None),
        }
    }

    /// Directory holding the seeded `admin` and `user` accounts.
    pub fn with_demo_accounts() -> Self {
        Self::new(demo_accounts(Utc::now()))
    }

    fn session_for(user: &User) -> ProviderSession {
        let token = format!("token-{}-{}", user.id, Utc::now().timestamp_millis());

        let attributes = HashMap::from([
            (ATTR_SUB.to_string(), user.id.clone()),
            (ATTR_EMAIL.to_string(), user.email.clone()),
            (ATTR_GIVEN_NAME.to_string(), user.first_name.clone()),
            (ATTR_FAMILY_NAME.to_string(), user.last_name.clone()),
            (ATTR_ROLE.to_string(), user.role.to_string()),
            (ATTR_IS_ACTIVE.to_string(), user.is_active.to_string()),
            (ATTR_CREATED_AT.to_string(), user.created_at.to_rfc3339()),
        ]);

        ProviderSession {
            username: user.username.clone(),
            tokens: TokenSet {
                access_token: token.clone(),
                id_token: token,
                refresh_token: None,
            },
            attributes,
        }
    }
}

#[async_trait]
impl IdentityProvider for DemoDirectoryProvider {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<ProviderSession, ProviderError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.username == credentials.username && a.password == credentials.password)
            .ok_or(ProviderError::NotAuthorized)?;

        let session = Self::session_for(&account.user);
        *self.session.lock().await = Some(session.clone());

        debug!(username = %account.user.username, "Demo sign-in succeeded");
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<ProviderSession>, ProviderError> {
        Ok(self.session.lock().await.clone())
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.session.lock().await.take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::auth::{UserRole, decode_user};

    #[tokio::test]
    async fn test_demo_accounts_accept_their_passwords() {
        let provider = DemoDirectoryProvider::with_demo_accounts();

        let admin = provider
            .authenticate(&LoginCredentials::new("admin", "password"))
            .await
            .unwrap();
        let user = provider
            .authenticate(&LoginCredentials::new("user", "123456"))
            .await
            .unwrap();

        assert_eq!(decode_user(&admin, Utc::now()).unwrap().role, UserRole::Admin);
        assert_eq!(decode_user(&user, Utc::now()).unwrap().role, UserRole::User);
        assert!(user.session_token().starts_with("token-2-"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_not_authorized() {
        let provider = DemoDirectoryProvider::with_demo_accounts();

        let err = provider
            .authenticate(&LoginCredentials::new("admin", "123456"))
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::NotAuthorized);

        let err = provider
            .authenticate(&LoginCredentials::new("nobody", "password"))
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::NotAuthorized);
        assert_eq!(provider.current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_out_ends_session() {
        let provider = DemoDirectoryProvider::with_demo_accounts();
        provider
            .authenticate(&LoginCredentials::new("admin", "password"))
            .await
            .unwrap();
        assert!(provider.current_session().await.unwrap().is_some());

        provider.sign_out().await.unwrap();
        assert_eq!(provider.current_session().await.unwrap(), None);
    }
}
