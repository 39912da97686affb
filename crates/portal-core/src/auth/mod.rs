//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: `User`, `UserRole`, `LoginCredentials`, `AuthState`
//! - `error`: `AuthError` (user-facing), `ProviderError`, `AttributeDecodeError`
//! - `provider`: `IdentityProvider` trait and provider session types
//! - `decode`: typed decoding of provider attributes
//! - `repository`: `AuthStateRepository` trait for persistence

mod decode;
mod error;
mod model;
mod provider;
pub mod repository;

pub use decode::{
    ATTR_CREATED_AT, ATTR_EMAIL, ATTR_FAMILY_NAME, ATTR_GIVEN_NAME, ATTR_IS_ACTIVE, ATTR_ROLE,
    ATTR_SUB, decode_user,
};
pub use error::{AttributeDecodeError, AuthError, Locale, ProviderError};
pub use model::{AuthState, LoginCredentials, User, UserRole};
pub use provider::{IdentityProvider, ProviderSession, TokenSet};
pub use repository::AuthStateRepository;

#[cfg(test)]
pub(crate) use model::fixtures;
