//! Managed user-pool identity provider client.
//!
//! Speaks the user pool's JSON API: `InitiateAuth` with the
//! `USER_PASSWORD_AUTH` flow to sign in, `GetUser` to read the attribute bag,
//! and `GlobalSignOut` to revoke the tokens. The issued tokens are kept in
//! client storage so a later process can resume the session.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use portal_core::auth::{IdentityProvider, LoginCredentials, ProviderError, ProviderSession, TokenSet};
use portal_core::config::ManagedIdentitySettings;
use portal_core::storage::ClientStorage;

/// Client storage key holding the provider's own tokens.
pub const PROVIDER_SESSION_KEY: &str = "identity-provider.session";

const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'static str,
    client_id: &'a str,
    auth_parameters: HashMap<&'static str, &'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    #[serde(default)]
    authentication_result: Option<AuthenticationResult>,
    #[serde(default)]
    challenge_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AccessTokenRequest<'a> {
    access_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserResponse {
    username: String,
    #[serde(default)]
    user_attributes: Vec<AttributeType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AttributeType {
    name: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,
    #[serde(alias = "Message", default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmptyResponse {}

/// Identity provider backed by a managed user pool.
pub struct CognitoIdentityProvider {
    http: Client,
    settings: ManagedIdentitySettings,
    storage: Arc<dyn ClientStorage>,
}

impl CognitoIdentityProvider {
    pub fn new(settings: ManagedIdentitySettings, storage: Arc<dyn ClientStorage>) -> Self {
        Self::with_client(Client::new(), settings, storage)
    }

    pub fn with_client(
        http: Client,
        settings: ManagedIdentitySettings,
        storage: Arc<dyn ClientStorage>,
    ) -> Self {
        info!(
            user_pool_id = %settings.user_pool_id,
            region = %settings.region,
            "Using managed identity provider"
        );
        Self {
            http,
            settings,
            storage,
        }
    }

    async fn call<B, R>(&self, operation: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| ProviderError::Network(format!("Failed to encode request: {}", e)))?;

        debug!(operation, endpoint = %self.settings.endpoint, "Calling identity provider");

        let response = self
            .http
            .post(&self.settings.endpoint)
            .header("X-Amz-Target", format!("{}.{}", TARGET_PREFIX, operation))
            .header("Content-Type", CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error: ErrorResponse = serde_json::from_str(&text).unwrap_or(ErrorResponse {
                error_type: None,
                message: None,
            });
            let message = error.message.unwrap_or_else(|| text.clone());
            return Err(match error.error_type {
                Some(code) => ProviderError::from_code(&code, message),
                None => ProviderError::Network(format!("HTTP {}: {}", status, message)),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            ProviderError::Network(format!("Failed to parse {} response: {}", operation, e))
        })
    }

    async fn fetch_user(&self, tokens: TokenSet) -> Result<ProviderSession, ProviderError> {
        let response: GetUserResponse = self
            .call(
                "GetUser",
                &AccessTokenRequest {
                    access_token: &tokens.access_token,
                },
            )
            .await?;

        let attributes = response
            .user_attributes
            .into_iter()
            .filter_map(|attr| attr.value.map(|value| (attr.name, value)))
            .collect();

        Ok(ProviderSession {
            username: response.username,
            tokens,
            attributes,
        })
    }

    async fn stored_tokens(&self) -> Option<TokenSet> {
        let raw = match self.storage.get_item(PROVIDER_SESSION_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Failed to read provider tokens");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tokens) => Some(tokens),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable provider tokens");
                self.forget_tokens().await;
                None
            }
        }
    }

    async fn remember_tokens(&self, tokens: &TokenSet) {
        let result = match serde_json::to_string(tokens) {
            Ok(serialized) => self.storage.set_item(PROVIDER_SESSION_KEY, &serialized).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to store provider tokens");
        }
    }

    async fn forget_tokens(&self) {
        if let Err(e) = self.storage.remove_item(PROVIDER_SESSION_KEY).await {
            warn!(error = %e, "Failed to remove provider tokens");
        }
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<ProviderSession, ProviderError> {
        let request = InitiateAuthRequest {
            auth_flow: "USER_PASSWORD_AUTH",
            client_id: &self.settings.client_id,
            auth_parameters: HashMap::from([
                ("USERNAME", credentials.username.as_str()),
                ("PASSWORD", credentials.password.as_str()),
            ]),
        };

        let response: InitiateAuthResponse = self.call("InitiateAuth", &request).await?;

        let Some(result) = response.authentication_result else {
            let challenge = response
                .challenge_name
                .unwrap_or_else(|| "MissingAuthenticationResult".to_string());
            return Err(ProviderError::Other {
                message: format!("unsupported sign-in challenge {}", challenge),
                code: challenge,
            });
        };

        let tokens = TokenSet {
            access_token: result.access_token,
            id_token: result.id_token,
            refresh_token: result.refresh_token,
        };

        let session = self.fetch_user(tokens).await?;
        self.remember_tokens(&session.tokens).await;

        info!(username = %session.username, "Provider sign-in succeeded");
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<ProviderSession>, ProviderError> {
        let Some(tokens) = self.stored_tokens().await else {
            return Ok(None);
        };

        match self.fetch_user(tokens).await {
            Ok(session) => Ok(Some(session)),
            Err(ProviderError::NotAuthorized) => {
                debug!("Stored provider tokens were rejected");
                self.forget_tokens().await;
                Err(ProviderError::NotAuthorized)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let Some(tokens) = self.stored_tokens().await else {
            return Ok(());
        };
        self.forget_tokens().await;

        let _: EmptyResponse = self
            .call(
                "GlobalSignOut",
                &AccessTokenRequest {
                    access_token: &tokens.access_token,
                },
            )
            .await?;
        Ok(())
    }
}
