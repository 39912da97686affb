//! `IdentityProvider` implementations and provider selection.

mod cognito;
mod demo;

use std::sync::Arc;

use portal_core::auth::IdentityProvider;
use portal_core::config::PortalConfig;
use portal_core::storage::ClientStorage;

pub use cognito::{CognitoIdentityProvider, PROVIDER_SESSION_KEY};
pub use demo::{DemoAccount, DemoDirectoryProvider};

/// Picks the managed provider when it is fully configured, otherwise the
/// demo directory.
pub fn provider_from_config(
    config: &PortalConfig,
    storage: Arc<dyn ClientStorage>,
) -> Arc<dyn IdentityProvider> {
    match config.identity.managed() {
        Some(settings) => Arc::new(CognitoIdentityProvider::new(settings, storage)),
        None => Arc::new(DemoDirectoryProvider::with_demo_accounts()),
    }
}
