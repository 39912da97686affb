//! Typed decoding of provider attribute bags into [`User`] records.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::error::AttributeDecodeError;
use super::model::{User, UserRole};
use super::provider::ProviderSession;

pub const ATTR_SUB: &str = "sub";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_GIVEN_NAME: &str = "given_name";
pub const ATTR_FAMILY_NAME: &str = "family_name";
pub const ATTR_ROLE: &str = "custom:role";
pub const ATTR_IS_ACTIVE: &str = "custom:is_active";
pub const ATTR_CREATED_AT: &str = "custom:created_at";

/// Decodes the provider's attributes into a [`User`].
///
/// `sub`, `email` and `custom:role` are required. Name attributes may be
/// absent (empty strings). `custom:is_active` defaults to `true` when absent
/// because the provider only opens sessions for enabled accounts, and
/// `custom:created_at` defaults to `now`. Present-but-malformed values are
/// always an error.
pub fn decode_user(
    session: &ProviderSession,
    now: DateTime<Utc>,
) -> Result<User, AttributeDecodeError> {
    let attrs = &session.attributes;

    let id = required(attrs, ATTR_SUB)?;
    let email = required(attrs, ATTR_EMAIL)?;
    let role_raw = required(attrs, ATTR_ROLE)?;
    let role = UserRole::from_str(role_raw).map_err(|_| AttributeDecodeError::Invalid {
        name: ATTR_ROLE,
        value: role_raw.to_string(),
    })?;

    let is_active = match attrs.get(ATTR_IS_ACTIVE) {
        None => true,
        Some(value) => value
            .parse::<bool>()
            .map_err(|_| AttributeDecodeError::Invalid {
                name: ATTR_IS_ACTIVE,
                value: value.clone(),
            })?,
    };

    let created_at = match attrs.get(ATTR_CREATED_AT) {
        None => now,
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| AttributeDecodeError::Invalid {
                name: ATTR_CREATED_AT,
                value: value.clone(),
            })?,
    };

    Ok(User {
        id: id.to_string(),
        username: session.username.clone(),
        email: email.to_string(),
        first_name: attrs.get(ATTR_GIVEN_NAME).cloned().unwrap_or_default(),
        last_name: attrs.get(ATTR_FAMILY_NAME).cloned().unwrap_or_default(),
        role,
        is_active,
        last_login_at: None,
        created_at,
    })
}

fn required<'a>(
    attrs: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, AttributeDecodeError> {
    match attrs.get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.as_str()),
        _ => Err(AttributeDecodeError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provider::TokenSet;

    fn session(attrs: &[(&str, &str)]) -> ProviderSession {
        ProviderSession {
            username: "hanako".to_string(),
            tokens: TokenSet {
                access_token: "access".to_string(),
                id_token: "id".to_string(),
                refresh_token: None,
            },
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_decode_full_attribute_set() {
        let s = session(&[
            ("sub", "u-1"),
            ("email", "hanako@example.com"),
            ("given_name", "花子"),
            ("family_name", "一般"),
            ("custom:role", "user"),
            ("custom:is_active", "true"),
            ("custom:created_at", "2024-01-01T00:00:00Z"),
        ]);
        let user = decode_user(&s, Utc::now()).unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.username, "hanako");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.first_name, "花子");
        assert!(user.is_active);
        assert_eq!(user.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_missing_role_is_an_error() {
        let s = session(&[("sub", "u-1"), ("email", "a@example.com")]);
        assert_eq!(
            decode_user(&s, Utc::now()),
            Err(AttributeDecodeError::Missing(ATTR_ROLE))
        );
    }

    #[test]
    fn test_blank_email_counts_as_missing() {
        let s = session(&[("sub", "u-1"), ("email", "  "), ("custom:role", "admin")]);
        assert_eq!(
            decode_user(&s, Utc::now()),
            Err(AttributeDecodeError::Missing(ATTR_EMAIL))
        );
    }

    #[test]
    fn test_unknown_role_is_invalid() {
        let s = session(&[
            ("sub", "u-1"),
            ("email", "a@example.com"),
            ("custom:role", "superuser"),
        ]);
        assert!(matches!(
            decode_user(&s, Utc::now()),
            Err(AttributeDecodeError::Invalid { name: ATTR_ROLE, .. })
        ));
    }

    #[test]
    fn test_malformed_is_active_is_invalid() {
        let s = session(&[
            ("sub", "u-1"),
            ("email", "a@example.com"),
            ("custom:role", "guest"),
            ("custom:is_active", "yes"),
        ]);
        assert!(matches!(
            decode_user(&s, Utc::now()),
            Err(AttributeDecodeError::Invalid { name: ATTR_IS_ACTIVE, .. })
        ));
    }
}
