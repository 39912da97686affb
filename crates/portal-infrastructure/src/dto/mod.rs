//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of what the portal keeps in
//! client storage. They are private to the infrastructure layer and handle
//! the evolution of the storage format over time.
//!
//! ### AuthState Version History
//! - **1.0.0**: Initial schema (`isAuthenticated`, `user`, `token`). Blobs
//!   written before the `version` field existed are read as 1.0.0.

mod auth_state;

pub use auth_state::{
    AUTH_STATE_ENTITY, AuthStateV1_0_0, LEGACY_AUTH_STATE_VERSION, UserDTO,
    create_auth_state_migrator,
};
