//! Unified path management for portal files.
//!
//! Platform directories are resolved through `AppPaths` from the
//! version-migrate crate. A base directory can be supplied instead, which
//! tests use to keep everything under a temp dir.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/portal/            # Config directory (AppPaths default)
//! └── config.toml              # Optional configuration file
//!
//! ~/.local/share/portal/       # Data directory
//! └── storage/                 # Client storage, one file per key
//!     ├── auth-state
//!     └── identity-provider.session
//! ```

use std::path::{Path, PathBuf};

use portal_core::PortalError;
use portal_core::error::Result;
use version_migrate::AppPaths;

const APP_NAME: &str = "portal";

/// Resolves the portal's config and data locations.
#[derive(Debug, Clone, Default)]
pub struct PortalPaths {
    base: Option<PathBuf>,
}

impl PortalPaths {
    /// Creates a resolver. With `Some(base)`, config lives in `base/config`
    /// and data in `base/data`; otherwise platform directories are used.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    fn app_paths() -> AppPaths {
        AppPaths::new(APP_NAME)
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.join("config")),
            None => Self::app_paths()
                .config_dir()
                .map_err(|e| PortalError::config(format!("Cannot resolve config directory: {}", e))),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.join("data")),
            None => Self::app_paths()
                .data_dir()
                .map_err(|e| PortalError::config(format!("Cannot resolve data directory: {}", e))),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory backing the file client storage.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("storage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_dirs_end_with_app_name() {
        let paths = PortalPaths::new(None);
        assert!(paths.config_dir().unwrap().ends_with("portal"));
        assert!(paths.data_dir().unwrap().ends_with("portal"));
    }

    #[test]
    fn test_base_override() {
        let paths = PortalPaths::new(Some(Path::new("/tmp/portal-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/portal-test/config/config.toml")
        );
        assert_eq!(
            paths.storage_dir().unwrap(),
            PathBuf::from("/tmp/portal-test/data/storage")
        );
    }
}
