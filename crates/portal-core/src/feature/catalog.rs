//! Static feature catalog built from configuration.

use crate::auth::UserRole;
use crate::config::PortalConfig;

use super::model::FeatureDescriptor;

pub const TODO_FEATURE_ID: &str = "todo";
pub const PROFILE_FEATURE_ID: &str = "profile";

/// The list of sub-applications the portal links to. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureCatalog {
    features: Vec<FeatureDescriptor>,
}

impl FeatureCatalog {
    pub fn new(features: Vec<FeatureDescriptor>) -> Self {
        Self { features }
    }

    /// Builds the catalog of the two feature applications from configuration.
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(vec![
            FeatureDescriptor {
                id: TODO_FEATURE_ID.to_string(),
                name: "TODO管理".to_string(),
                description: "タスクとTODOを効率的に管理できます".to_string(),
                url: config.features.feature_a_url.clone(),
                icon: "📝".to_string(),
                color: "bg-blue-500".to_string(),
                is_active: true,
                required_role: Some(UserRole::User),
            },
            FeatureDescriptor {
                id: PROFILE_FEATURE_ID.to_string(),
                name: "プロフィール管理".to_string(),
                description: "個人情報とプロフィールを管理できます".to_string(),
                url: config.features.feature_b_url.clone(),
                icon: "👤".to_string(),
                color: "bg-green-500".to_string(),
                is_active: true,
                required_role: Some(UserRole::User),
            },
        ])
    }

    /// All features, including inactive ones (admin view).
    pub fn all(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    pub fn get(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
