//! Authentication domain models.
//!
//! Contains the user identity record, the login credentials and the session
//! state that is persisted between application runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a portal user.
///
/// Roles form a strict total order `Admin > User > Guest`; the derived
/// `Ord` follows the declaration order, so `Guest` is the smallest value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Guest,
    User,
    Admin,
}

impl UserRole {
    /// Returns true if this role satisfies a requirement of `required`.
    ///
    /// A role is admitted to any requirement at or below its own rank.
    pub fn dominates(self, required: UserRole) -> bool {
        self >= required
    }
}

/// Identity record of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    /// Set by the session store on every successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns "{last} {first}", the display order used across the portal.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// Username and password pair submitted on login.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Current authentication state of the running client.
///
/// An authenticated state holds both `user` and `token`; an unauthenticated
/// one holds neither.
/// Use [`AuthState::authenticated`] and [`AuthState::default`] to build values
/// that uphold this; deserialized values are checked with
/// [`AuthState::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// Creates an authenticated state for `user` holding `token`.
    pub fn authenticated(user: User, token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// Returns true when the state is either fully signed in (user and token
    /// present) or fully signed out (neither present).
    pub fn is_consistent(&self) -> bool {
        match (self.is_authenticated, &self.user, &self.token) {
            (true, Some(_), Some(_)) => true,
            (false, None, None) => true,
            _ => false,
        }
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<UserRole> {
        if !self.is_authenticated {
            return None;
        }
        self.user.as_ref().map(|user| user.role)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn user_with_role(role: UserRole) -> User {
        User {
            id: "1".to_string(),
            username: role.to_string(),
            email: format!("{}@example.com", role),
            first_name: "太郎".to_string(),
            last_name: "管理".to_string(),
            role,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
        }
    }
}
