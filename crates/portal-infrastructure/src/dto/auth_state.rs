//! Persisted session state DTOs and migrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use portal_core::auth::{AuthState, User, UserRole};

/// User record as stored inside the session blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Session state schema V1.0.0.
///
/// Field names match the blob the browser client keeps under `auth-state`.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct AuthStateV1_0_0 {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserDTO>,
    #[serde(default)]
    pub token: Option<String>,
}

// ============================================================================
// Domain conversions
// ============================================================================

impl From<UserDTO> for User {
    fn from(dto: UserDTO) -> Self {
        User {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            role: dto.role,
            is_active: dto.is_active,
            last_login_at: dto.last_login_at,
            created_at: dto.created_at,
        }
    }
}

impl From<User> for UserDTO {
    fn from(user: User) -> Self {
        UserDTO {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

impl IntoDomain<AuthState> for AuthStateV1_0_0 {
    fn into_domain(self) -> AuthState {
        AuthState {
            is_authenticated: self.is_authenticated,
            user: self.user.map(User::from),
            token: self.token,
        }
    }
}

impl FromDomain<AuthState> for AuthStateV1_0_0 {
    fn from_domain(state: AuthState) -> Self {
        AuthStateV1_0_0 {
            is_authenticated: state.is_authenticated,
            user: state.user.map(UserDTO::from),
            token: state.token,
        }
    }
}

// ============================================================================
// Migrator
// ============================================================================

/// Entity name the session state is registered under.
pub const AUTH_STATE_ENTITY: &str = "auth_state";

/// Schema version assumed for blobs written without a `version` field.
pub const LEGACY_AUTH_STATE_VERSION: &str = "1.0.0";

/// Creates a migrator for the persisted session state.
///
/// # Example
///
/// ```ignore
/// let migrator = create_auth_state_migrator();
/// let state: AuthState = migrator.load_flat_from("auth_state", json_value)?;
/// ```
pub fn create_auth_state_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("auth_state" => [AuthStateV1_0_0, AuthState], save = true)
        .expect("Failed to create auth_state migrator")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_v1_blob() {
        let migrator = create_auth_state_migrator();
        let value = json!({
            "version": "1.0.0",
            "isAuthenticated": true,
            "user": {
                "id": "1",
                "username": "admin",
                "email": "admin@example.com",
                "firstName": "管理",
                "lastName": "太郎",
                "role": "admin",
                "isActive": true,
                "lastLoginAt": null,
                "createdAt": "2024-01-01T00:00:00Z"
            },
            "token": "token-1-1700000000000"
        });

        let state: AuthState = migrator.load_flat_from(AUTH_STATE_ENTITY, value).unwrap();

        assert!(state.is_authenticated);
        let user = state.user.unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.display_name(), "太郎 管理");
        assert_eq!(state.token.as_deref(), Some("token-1-1700000000000"));
    }

    #[test]
    fn test_saved_blob_carries_version() {
        let migrator = create_auth_state_migrator();
        let saved = migrator
            .save_domain_flat(AUTH_STATE_ENTITY, AuthState::default())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["isAuthenticated"], false);
    }
}
