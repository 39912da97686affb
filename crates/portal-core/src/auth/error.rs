//! Authentication error types.
//!
//! `ProviderError` is what an identity provider reports; `AuthError` is what
//! the session store hands back to the caller, each variant carrying a
//! user-facing localized message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language used for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Failure reported by an identity provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Wrong username/password or the token is no longer accepted.
    #[error("not authorized")]
    NotAuthorized,

    #[error("user is not confirmed")]
    UserNotConfirmed,

    #[error("password reset required")]
    PasswordResetRequired,

    #[error("user not found")]
    UserNotFound,

    #[error("too many requests")]
    TooManyRequests,

    /// A provider error code with no dedicated mapping.
    #[error("provider error {code}: {message}")]
    Other { code: String, message: String },

    /// Transport-level failure (connection refused, malformed response, ...).
    #[error("network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// Maps a provider error code (e.g. `NotAuthorizedException`) to a variant.
    ///
    /// Codes may arrive qualified (`com.amazonaws...#NotAuthorizedException`);
    /// only the part after the last `#` is considered.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let short = code.rsplit('#').next().unwrap_or(code);
        match short {
            "NotAuthorizedException" => Self::NotAuthorized,
            "UserNotConfirmedException" => Self::UserNotConfirmed,
            "PasswordResetRequiredException" => Self::PasswordResetRequired,
            "UserNotFoundException" => Self::UserNotFound,
            "TooManyRequestsException" | "TooManyFailedAttemptsException" => Self::TooManyRequests,
            other => Self::Other {
                code: other.to_string(),
                message: message.into(),
            },
        }
    }
}

/// A required attribute was missing or malformed in a provider response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeDecodeError {
    #[error("missing required attribute '{0}'")]
    Missing(&'static str),

    #[error("invalid value for attribute '{name}': {value}")]
    Invalid { name: &'static str, value: String },
}

/// Login failure returned by the session store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("account is disabled")]
    AccountDisabled,

    #[error("account is not confirmed")]
    UserNotConfirmed,

    #[error("password reset required")]
    PasswordResetRequired,

    #[error("user not found")]
    UserNotFound,

    #[error("too many attempts")]
    RateLimited,

    /// The provider accepted the credentials but returned attributes that
    /// could not be decoded into a user.
    #[error("invalid user attributes: {0}")]
    InvalidProfile(#[from] AttributeDecodeError),

    /// Transient or unmapped provider failure.
    #[error("login failed: {0}")]
    Provider(String),
}

impl AuthError {
    /// User-facing message for this error in the given locale.
    pub fn localized(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::InvalidCredentials, Locale::Ja) => {
                "ユーザー名またはパスワードが正しくありません"
            }
            (Self::InvalidCredentials, Locale::En) => "The username or password is incorrect.",
            (Self::AccountDisabled, Locale::Ja) => "このアカウントは無効化されています",
            (Self::AccountDisabled, Locale::En) => "This account has been disabled.",
            (Self::UserNotConfirmed, Locale::Ja) => "アカウントが確認されていません",
            (Self::UserNotConfirmed, Locale::En) => "This account has not been confirmed.",
            (Self::PasswordResetRequired, Locale::Ja) => "パスワードのリセットが必要です",
            (Self::PasswordResetRequired, Locale::En) => "A password reset is required.",
            (Self::UserNotFound, Locale::Ja) => "ユーザーが見つかりません",
            (Self::UserNotFound, Locale::En) => "The user was not found.",
            (Self::RateLimited, Locale::Ja) => {
                "試行回数が多すぎます。しばらくしてから再度お試しください"
            }
            (Self::RateLimited, Locale::En) => "Too many attempts. Please try again later.",
            (Self::InvalidProfile(_) | Self::Provider(_), Locale::Ja) => {
                "ログインに失敗しました。しばらくしてから再度お試しください"
            }
            (Self::InvalidProfile(_) | Self::Provider(_), Locale::En) => {
                "Login failed. Please try again later."
            }
        }
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotAuthorized => Self::InvalidCredentials,
            ProviderError::UserNotConfirmed => Self::UserNotConfirmed,
            ProviderError::PasswordResetRequired => Self::PasswordResetRequired,
            ProviderError::UserNotFound => Self::UserNotFound,
            ProviderError::TooManyRequests => Self::RateLimited,
            other => Self::Provider(other.to_string()),
        }
    }
}
