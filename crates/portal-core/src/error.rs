//! Error types for the Portal application.

use thiserror::Error;

/// A shared error type for the storage, configuration and persistence layers.
///
/// Authentication failures are not reported through this type; see
/// [`crate::auth::AuthError`] for the user-facing login errors.
#[derive(Error, Debug, Clone)]
pub enum PortalError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (client storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration error (versioned persisted state)
    #[error("Migration error: {0}")]
    Migration(String),
}

impl PortalError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Migration error
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration(message.into())
    }

    /// Creates a JSON serialization error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: message.into(),
        }
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a migration error
    pub fn is_migration(&self) -> bool {
        matches!(self, Self::Migration(_))
    }

    /// Returns true when the error means the stored bytes could not be
    /// turned back into a value, as opposed to the storage being unreachable.
    pub fn is_corrupt_data(&self) -> bool {
        self.is_serialization() || self.is_migration()
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for PortalError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_data_classification() {
        assert!(PortalError::json("bad").is_corrupt_data());
        assert!(PortalError::migration("unknown version").is_corrupt_data());
        assert!(!PortalError::io("disk full").is_corrupt_data());
        assert!(!PortalError::config("missing port").is_corrupt_data());
    }

    #[test]
    fn test_from_serde_json_error() {
        let err: PortalError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(err.to_string().contains("JSON"));
    }
}
