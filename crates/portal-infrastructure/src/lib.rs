//! Infrastructure layer for the Portal.
//!
//! Client storage, the versioned session-state repository, identity provider
//! clients, configuration loading and demo data.

pub mod auth_state_repository;
pub mod config_service;
pub mod dto;
pub mod identity;
pub mod paths;
pub mod seed;
pub mod storage;

pub use crate::auth_state_repository::KeyValueAuthStateRepository;
pub use crate::config_service::ConfigService;
pub use crate::identity::{
    CognitoIdentityProvider, DemoAccount, DemoDirectoryProvider, provider_from_config,
};
pub use crate::paths::PortalPaths;
pub use crate::storage::{FileClientStorage, InMemoryClientStorage};
