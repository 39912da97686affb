//! Domain layer for the Portal.
//!
//! Holds the session and role models, the feature catalog with its access
//! filter, and the generic record store used by the todo and profile
//! feature applications. Storage and identity-provider implementations live
//! in `portal-infrastructure`.

pub mod auth;
pub mod config;
pub mod error;
pub mod feature;
pub mod profile;
pub mod record;
pub mod storage;
pub mod todo;

// Re-export common error type
pub use error::PortalError;
