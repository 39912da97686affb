//! Configuration loading.
//!
//! Reads `config.toml` from the portal config directory when it exists and
//! then applies environment overrides.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use portal_core::PortalError;
use portal_core::config::PortalConfig;
use portal_core::error::Result;

use crate::paths::PortalPaths;

/// Loads [`PortalConfig`] from file and environment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    pub fn new(paths: &PortalPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the file (defaults when absent), then applies the process
    /// environment.
    pub async fn load(&self) -> Result<PortalConfig> {
        let mut config = self.load_file().await?;
        config.apply_env()?;
        Ok(config)
    }

    /// Loads only the file. A missing file yields the defaults.
    pub async fn load_file(&self) -> Result<PortalConfig> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => {
                info!(path = %self.config_path.display(), "Loaded configuration file");
                PortalConfig::from_toml_str(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "No configuration file, using defaults");
                Ok(PortalConfig::default())
            }
            Err(e) => Err(PortalError::io(format!(
                "Failed to read '{}': {}",
                self.config_path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.load_file().await.unwrap(), PortalConfig::default());
    }

    #[tokio::test]
    async fn test_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::new(Some(temp_dir.path()));
        let service = ConfigService::new(&paths).unwrap();

        std::fs::create_dir_all(temp_dir.path().join("config")).unwrap();
        std::fs::write(
            service.config_path(),
            "port = 9000\n\n[features]\nfeature_a_url = \"https://todo.example.com\"\n",
        )
        .unwrap();

        let config = service.load_file().await.unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.features.feature_a_url, "https://todo.example.com");
        assert_eq!(config.features.feature_b_url, "http://localhost:3002");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        let err = ConfigService::with_path(path).load_file().await.unwrap_err();
        assert!(err.is_serialization());
    }
}
