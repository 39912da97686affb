//! Feature catalog domain module.
//!
//! - `model`: `FeatureDescriptor`
//! - `catalog`: `FeatureCatalog`, built from configuration
//! - `access`: the role-based visibility filter

mod access;
mod catalog;
mod model;

pub use access::{accessible_features, all_features};
pub use catalog::{FeatureCatalog, PROFILE_FEATURE_ID, TODO_FEATURE_ID};
pub use model::FeatureDescriptor;
