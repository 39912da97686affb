//! Role-based feature visibility.

use crate::auth::AuthState;

use super::catalog::FeatureCatalog;
use super::model::FeatureDescriptor;

/// Returns the features visible to the session, in catalog order.
///
/// Empty when the session is not authenticated. Otherwise keeps each active
/// feature whose required role (if any) is at or below the user's role under
/// `admin > user > guest`.
pub fn accessible_features(session: &AuthState, catalog: &FeatureCatalog) -> Vec<FeatureDescriptor> {
    let Some(role) = session.role() else {
        return Vec::new();
    };

    catalog
        .all()
        .iter()
        .filter(|feature| feature.is_visible_to(role))
        .cloned()
        .collect()
}

/// Returns every catalog entry regardless of role or activity (admin view).
pub fn all_features(catalog: &FeatureCatalog) -> Vec<FeatureDescriptor> {
    catalog.all().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{UserRole, fixtures::user_with_role};

    fn feature(id: &str, active: bool, required: Option<UserRole>) -> FeatureDescriptor {
        FeatureDescriptor {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            url: format!("http://localhost/{}", id),
            icon: String::new(),
            color: String::new(),
            is_active: active,
            required_role: required,
        }
    }

    fn full_catalog() -> FeatureCatalog {
        FeatureCatalog::new(vec![
            feature("open", true, None),
            feature("guest", true, Some(UserRole::Guest)),
            feature("user", true, Some(UserRole::User)),
            feature("admin", true, Some(UserRole::Admin)),
            feature("retired", false, None),
            feature("retired-admin", false, Some(UserRole::Admin)),
        ])
    }

    fn ids(features: &[FeatureDescriptor]) -> Vec<&str> {
        features.iter().map(|f| f.id.as_str()).collect()
    }

    fn session_for(role: UserRole) -> AuthState {
        AuthState::authenticated(user_with_role(role), "token")
    }

    #[test]
    fn test_unauthenticated_sees_nothing() {
        assert!(accessible_features(&AuthState::default(), &full_catalog()).is_empty());
    }

    #[test]
    fn test_authenticated_flag_without_user_sees_nothing() {
        let state = AuthState {
            is_authenticated: true,
            user: None,
            token: Some("t".to_string()),
        };
        assert!(accessible_features(&state, &full_catalog()).is_empty());
    }

    #[test]
    fn test_admin_sees_all_active() {
        let visible = accessible_features(&session_for(UserRole::Admin), &full_catalog());
        assert_eq!(ids(&visible), vec!["open", "guest", "user", "admin"]);
    }

    #[test]
    fn test_user_sees_user_and_below() {
        let visible = accessible_features(&session_for(UserRole::User), &full_catalog());
        assert_eq!(ids(&visible), vec!["open", "guest", "user"]);
    }

    #[test]
    fn test_guest_sees_guest_and_open() {
        let visible = accessible_features(&session_for(UserRole::Guest), &full_catalog());
        assert_eq!(ids(&visible), vec!["open", "guest"]);
    }

    #[test]
    fn test_visibility_matches_role_dominance_for_every_pair() {
        let roles = [UserRole::Guest, UserRole::User, UserRole::Admin];
        let requirements = [None, Some(UserRole::Guest), Some(UserRole::User), Some(UserRole::Admin)];

        for role in roles {
            for required in requirements {
                for active in [true, false] {
                    let catalog = FeatureCatalog::new(vec![feature("f", active, required)]);
                    let visible = !accessible_features(&session_for(role), &catalog).is_empty();
                    let expected = active && required.is_none_or(|r| role >= r);
                    assert_eq!(
                        visible, expected,
                        "role={:?} required={:?} active={}",
                        role, required, active
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_features_includes_inactive() {
        assert_eq!(all_features(&full_catalog()).len(), 6);
    }
}
