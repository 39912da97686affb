//! Portal configuration.
//!
//! Values come from an optional `config.toml` and are then overridden by
//! environment variables:
//!
//! | Variable               | Field                        | Default                  |
//! |------------------------|------------------------------|--------------------------|
//! | `PORT`                 | `port`                       | `8080`                   |
//! | `FEATURE_A_URL`        | `features.feature_a_url`     | `http://localhost:3001`  |
//! | `FEATURE_B_URL`        | `features.feature_b_url`     | `http://localhost:3002`  |
//! | `COGNITO_USER_POOL_ID` | `identity.user_pool_id`      | unset                    |
//! | `COGNITO_CLIENT_ID`    | `identity.client_id`         | unset                    |
//! | `COGNITO_REGION`       | `identity.region`            | unset                    |
//! | `PORTAL_LOCALE`        | `locale`                     | `ja`                     |

use serde::{Deserialize, Serialize};

use crate::auth::Locale;
use crate::error::{PortalError, Result};

pub const ENV_PORT: &str = "PORT";
pub const ENV_FEATURE_A_URL: &str = "FEATURE_A_URL";
pub const ENV_FEATURE_B_URL: &str = "FEATURE_B_URL";
pub const ENV_COGNITO_USER_POOL_ID: &str = "COGNITO_USER_POOL_ID";
pub const ENV_COGNITO_CLIENT_ID: &str = "COGNITO_CLIENT_ID";
pub const ENV_COGNITO_REGION: &str = "COGNITO_REGION";
pub const ENV_LOCALE: &str = "PORTAL_LOCALE";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub features: FeatureUrls,

    #[serde(default)]
    pub identity: IdentitySettings,
}

/// URLs of the downstream feature applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureUrls {
    #[serde(default = "default_feature_a_url")]
    pub feature_a_url: String,

    #[serde(default = "default_feature_b_url")]
    pub feature_b_url: String,
}

/// Managed identity provider settings. All three must be set for the managed
/// provider to be used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentitySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Overrides the regional endpoint (tests and local emulators).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Complete managed identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedIdentitySettings {
    pub user_pool_id: String,
    pub client_id: String,
    pub region: String,
    pub endpoint: String,
}

fn default_port() -> u16 {
    8080
}

fn default_feature_a_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_feature_b_url() -> String {
    "http://localhost:3002".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            locale: Locale::default(),
            features: FeatureUrls::default(),
            identity: IdentitySettings::default(),
        }
    }
}

impl Default for FeatureUrls {
    fn default() -> Self {
        Self {
            feature_a_url: default_feature_a_url(),
            feature_b_url: default_feature_b_url(),
        }
    }
}

impl IdentitySettings {
    /// Returns the managed settings when pool, client and region are all set.
    pub fn managed(&self) -> Option<ManagedIdentitySettings> {
        let user_pool_id = non_empty(self.user_pool_id.as_deref())?;
        let client_id = non_empty(self.client_id.as_deref())?;
        let region = non_empty(self.region.as_deref())?;
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("https://cognito-idp.{}.amazonaws.com/", region));

        Some(ManagedIdentitySettings {
            user_pool_id: user_pool_id.to_string(),
            client_id: client_id.to_string(),
            region: region.to_string(),
            endpoint,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl PortalConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| PortalError::config(format!("invalid {}: '{}'", ENV_PORT, port)))?;
        }
        if let Some(url) = lookup(ENV_FEATURE_A_URL) {
            self.features.feature_a_url = url;
        }
        if let Some(url) = lookup(ENV_FEATURE_B_URL) {
            self.features.feature_b_url = url;
        }
        if let Some(pool) = lookup(ENV_COGNITO_USER_POOL_ID) {
            self.identity.user_pool_id = Some(pool);
        }
        if let Some(client) = lookup(ENV_COGNITO_CLIENT_ID) {
            self.identity.client_id = Some(client);
        }
        if let Some(region) = lookup(ENV_COGNITO_REGION) {
            self.identity.region = Some(region);
        }
        if let Some(locale) = lookup(ENV_LOCALE) {
            self.locale = match locale.trim().to_ascii_lowercase().as_str() {
                "ja" => Locale::Ja,
                "en" => Locale::En,
                other => {
                    return Err(PortalError::config(format!(
                        "invalid {}: '{}'",
                        ENV_LOCALE, other
                    )));
                }
            };
        }
        Ok(())
    }
}
