//! File-backed client storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use portal_core::PortalError;
use portal_core::error::Result;
use portal_core::storage::ClientStorage;

use crate::paths::PortalPaths;

/// Stores each key as its own file under a directory.
///
/// Writes go to a temp file in the same directory followed by a rename, so a
/// reader never observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileClientStorage {
    dir: PathBuf,
}

impl FileClientStorage {
    /// Creates a storage rooted at the portal data directory.
    pub fn new(paths: &PortalPaths) -> Result<Self> {
        Ok(Self::with_dir(paths.storage_dir()?))
    }

    /// Creates a storage rooted at `dir` (created lazily on first write).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(PortalError::data_access(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl ClientStorage for FileClientStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortalError::io(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PortalError::io(format!("Failed to create storage directory: {}", e)))?;

        let tmp_path = self.dir.join(format!(".{}.tmp", key));
        let written = async {
            let mut tmp_file = fs::File::create(&tmp_path).await?;
            tmp_file.write_all(value.as_bytes()).await?;
            tmp_file.sync_all().await?;
            drop(tmp_file);
            fs::rename(&tmp_path, &path).await
        }
        .await;

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(PortalError::io(format!(
                "Failed to write '{}': {}",
                path.display(),
                e
            )));
        }

        debug!(key, "client storage item written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(key, "client storage item removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortalError::io(format!(
                "Failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
