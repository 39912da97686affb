use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use portal_core::auth::{
    AuthError, AuthState, AuthStateRepository, IdentityProvider, Locale, LoginCredentials, User,
    decode_user,
};
use portal_core::feature::{FeatureCatalog, FeatureDescriptor, accessible_features};

/// Holds the authentication state of the running client.
///
/// `SessionManager` is responsible for:
/// - Signing in through the identity provider
/// - Signing out (locally and, best-effort, at the provider)
/// - Restoring the session on startup
/// - Mirroring every state change to client storage
///
/// One instance is created at startup and shared by reference; there is no
/// process-wide global.
pub struct SessionManager {
    /// Current state
    state: RwLock<AuthState>,
    /// Serializes login attempts
    login_lock: Mutex<()>,
    provider: Arc<dyn IdentityProvider>,
    repository: Arc<dyn AuthStateRepository>,
    locale: Locale,
}

impl SessionManager {
    /// Creates an unauthenticated manager. Call [`SessionManager::restore`]
    /// once at startup to pick up an earlier session.
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        repository: Arc<dyn AuthStateRepository>,
    ) -> Self {
        Self {
            state: RwLock::new(AuthState::default()),
            login_lock: Mutex::new(()),
            provider,
            repository,
            locale: Locale::default(),
        }
    }

    /// Sets the language of user-facing error messages.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized message for a login error, in this manager's locale.
    pub fn error_message(&self, error: &AuthError) -> &'static str {
        error.localized(self.locale)
    }

    /// Signs in with `credentials`.
    ///
    /// On success the state becomes authenticated with the provider's user
    /// (its `last_login_at` stamped now) and is persisted. On failure the
    /// state is left untouched. Concurrent calls run one after another.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        let _guard = self.login_lock.lock().await;

        debug!(username = %credentials.username, "Attempting login");

        let session = self
            .provider
            .authenticate(credentials)
            .await
            .map_err(|e| {
                let err = AuthError::from(e);
                info!(username = %credentials.username, error = %err, "Login rejected");
                err
            })?;

        let now = Utc::now();
        let mut user = decode_user(&session, now).map_err(|e| {
            warn!(username = %credentials.username, error = %e, "Provider returned unusable attributes");
            AuthError::from(e)
        })?;

        if !user.is_active {
            info!(username = %user.username, "Login rejected for disabled account");
            if let Err(e) = self.provider.sign_out().await {
                warn!(error = %e, "Failed to end provider session of disabled account");
            }
            return Err(AuthError::AccountDisabled);
        }

        user.last_login_at = Some(now);
        let new_state = AuthState::authenticated(user, session.session_token());

        *self.state.write().await = new_state.clone();
        self.persist(&new_state).await;

        info!(username = %credentials.username, "Login succeeded");
        Ok(())
    }

    /// Signs out. Never fails; provider and storage errors are logged.
    pub async fn logout(&self) {
        let previous = std::mem::take(&mut *self.state.write().await);

        if let Err(e) = self.provider.sign_out().await {
            warn!(error = %e, "Failed to end provider session");
        }
        if let Err(e) = self.repository.clear().await {
            warn!(error = %e, "Failed to clear persisted auth state");
        }

        if let Some(user) = previous.user {
            info!(username = %user.username, "Logged out");
        }
    }

    /// Restores the session on startup and returns the resulting state.
    ///
    /// A live provider session wins over the persisted state. If there is
    /// none, or it cannot be validated or decoded, the persisted state is
    /// used. A persisted blob that cannot be decoded is removed and the
    /// session starts unauthenticated.
    pub async fn restore(&self) -> AuthState {
        let persisted = self.load_persisted().await;

        let restored = match self.restore_from_provider(persisted.as_ref()).await {
            Some(state) => {
                self.persist(&state).await;
                state
            }
            None => persisted.unwrap_or_default(),
        };

        info!(
            authenticated = restored.is_authenticated,
            username = restored.user.as_ref().map(|u| u.username.as_str()),
            "Session restored"
        );

        *self.state.write().await = restored.clone();
        restored
    }

    /// Snapshot of the current state.
    pub async fn auth_state(&self) -> AuthState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    pub async fn current_user(&self) -> Option<User> {
        let state = self.state.read().await;
        if state.is_authenticated {
            state.user.clone()
        } else {
            None
        }
    }

    /// Features of `catalog` visible to the current session.
    pub async fn accessible_features(&self, catalog: &FeatureCatalog) -> Vec<FeatureDescriptor> {
        accessible_features(&*self.state.read().await, catalog)
    }

    async fn restore_from_provider(&self, persisted: Option<&AuthState>) -> Option<AuthState> {
        let session = match self.provider.current_session().await {
            Ok(Some(session)) => session,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Provider session could not be validated");
                return None;
            }
        };

        let mut user = match decode_user(&session, Utc::now()) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Provider session has unusable attributes");
                return None;
            }
        };

        if !user.is_active {
            info!(username = %user.username, "Provider session belongs to a disabled account");
            if let Err(e) = self.provider.sign_out().await {
                warn!(error = %e, "Failed to end provider session of disabled account");
            }
            return Some(AuthState::default());
        }

        user.last_login_at = persisted
            .and_then(|state| state.user.as_ref())
            .filter(|previous| previous.id == user.id)
            .and_then(|previous| previous.last_login_at);

        Some(AuthState::authenticated(user, session.session_token()))
    }

    async fn load_persisted(&self) -> Option<AuthState> {
        match self.repository.load().await {
            Ok(state) => state,
            Err(e) if e.is_corrupt_data() => {
                warn!(error = %e, "Discarding corrupt persisted auth state");
                if let Err(e) = self.repository.clear().await {
                    warn!(error = %e, "Failed to remove corrupt auth state");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to read persisted auth state");
                None
            }
        }
    }

    async fn persist(&self, state: &AuthState) {
        if let Err(e) = self.repository.save(state).await {
            warn!(error = %e, "Failed to persist auth state");
        }
    }
}
