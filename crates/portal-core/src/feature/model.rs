//! Feature descriptor domain model.

use serde::{Deserialize, Serialize};

use crate::auth::UserRole;

/// A sub-application reachable from the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub is_active: bool,
    /// Minimum role required to see the feature. `None` means any
    /// authenticated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<UserRole>,
}

impl FeatureDescriptor {
    /// Returns true if a user with `role` may see this feature.
    pub fn is_visible_to(&self, role: UserRole) -> bool {
        if !self.is_active {
            return false;
        }
        match self.required_role {
            None => true,
            Some(required) => role.dominates(required),
        }
    }
}
