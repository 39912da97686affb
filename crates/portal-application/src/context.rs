//! Dependency container wiring configuration, storage, identity provider,
//! session state and the feature record stores.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::info;

use portal_core::auth::IdentityProvider;
use portal_core::config::PortalConfig;
use portal_core::error::Result;
use portal_core::feature::{FeatureCatalog, FeatureDescriptor};
use portal_core::profile::ProfileStore;
use portal_core::storage::ClientStorage;
use portal_core::todo::TodoStore;
use portal_infrastructure::seed::{seed_profiles, seed_todos};
use portal_infrastructure::{
    ConfigService, FileClientStorage, KeyValueAuthStateRepository, PortalPaths,
    provider_from_config,
};

use crate::session::SessionManager;

/// Everything a running portal needs, constructed once at startup.
pub struct PortalContext {
    config: PortalConfig,
    catalog: FeatureCatalog,
    session: Arc<SessionManager>,
    todos: Arc<RwLock<TodoStore>>,
    profiles: Arc<RwLock<ProfileStore>>,
}

impl PortalContext {
    /// Wires a context over the given storage and provider, seeding the
    /// record stores from the thread RNG.
    pub fn new(
        config: PortalConfig,
        storage: Arc<dyn ClientStorage>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self::with_rng(config, storage, provider, &mut rand::thread_rng())
    }

    /// Like [`PortalContext::new`] with an explicit random source for the
    /// seeded records.
    pub fn with_rng<R: Rng + ?Sized>(
        config: PortalConfig,
        storage: Arc<dyn ClientStorage>,
        provider: Arc<dyn IdentityProvider>,
        rng: &mut R,
    ) -> Self {
        let repository = Arc::new(KeyValueAuthStateRepository::new(storage));
        let session = SessionManager::new(provider, repository).with_locale(config.locale);
        let catalog = FeatureCatalog::from_config(&config);

        let now = Utc::now();
        let todos = TodoStore::with_records(seed_todos(rng, now));
        let profiles = ProfileStore::with_records(seed_profiles(rng, now));

        Self {
            config,
            catalog,
            session: Arc::new(session),
            todos: Arc::new(RwLock::new(todos)),
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Loads configuration, opens file storage, selects the identity
    /// provider and restores the previous session.
    pub async fn bootstrap(paths: &PortalPaths) -> Result<Self> {
        let config = ConfigService::new(paths)?.load().await?;
        let storage: Arc<dyn ClientStorage> = Arc::new(FileClientStorage::new(paths)?);
        let provider = provider_from_config(&config, storage.clone());

        let context = Self::new(config, storage, provider);
        context.session.restore().await;

        info!(
            features = context.catalog.len(),
            port = context.config.port,
            "Portal context ready"
        );
        Ok(context)
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    pub fn todos(&self) -> &Arc<RwLock<TodoStore>> {
        &self.todos
    }

    pub fn profiles(&self) -> &Arc<RwLock<ProfileStore>> {
        &self.profiles
    }

    /// Catalog entries visible to the current session.
    pub async fn visible_features(&self) -> Vec<FeatureDescriptor> {
        self.session.accessible_features(&self.catalog).await
    }
}
