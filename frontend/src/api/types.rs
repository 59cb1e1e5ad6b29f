use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PASSWORD_RESET_REQUEST_TYPE: &str = "PASSWORD_RESET";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeRequest {
    pub request_type: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_url: Option<String>,
}

impl SendOobCodeRequest {
    pub fn password_reset(email: impl Into<String>, continue_url: Option<String>) -> Self {
        Self {
            request_type: PASSWORD_RESET_REQUEST_TYPE.to_string(),
            email: email.into(),
            continue_url,
        }
    }
}

/// Error envelope returned by the Identity Toolkit API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorEnvelope {
    pub error: ProviderErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub message: String,
}

/// Why the provider refused a password reset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetErrorKind {
    InvalidEmail,
    UserNotFound,
    MissingEmail,
    UserDisabled,
    TooManyRequests,
    NetworkRequestFailed,
    Other(String),
}

impl ResetErrorKind {
    /// Classifies both REST codes (`EMAIL_NOT_FOUND`, optionally followed by
    /// ` : detail`) and SDK codes (`auth/user-not-found`).
    pub fn from_code(raw: &str) -> Self {
        let code = raw.split(" : ").next().unwrap_or_default().trim();
        let code = code.strip_prefix("auth/").unwrap_or(code);
        match code {
            "INVALID_EMAIL" | "invalid-email" => Self::InvalidEmail,
            "EMAIL_NOT_FOUND" | "user-not-found" => Self::UserNotFound,
            "MISSING_EMAIL" | "missing-email" => Self::MissingEmail,
            "USER_DISABLED" | "user-disabled" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "too-many-requests" => Self::TooManyRequests,
            "network-request-failed" => Self::NetworkRequestFailed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::InvalidEmail => "invalid-email",
            Self::UserNotFound => "user-not-found",
            Self::MissingEmail => "missing-email",
            Self::UserDisabled => "user-disabled",
            Self::TooManyRequests => "too-many-requests",
            Self::NetworkRequestFailed => "network-request-failed",
            Self::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password reset rejected by identity provider: {}", .kind.code())]
pub struct ProviderError {
    pub kind: ResetErrorKind,
}

impl ProviderError {
    pub fn new(kind: ResetErrorKind) -> Self {
        Self { kind }
    }

    pub fn network() -> Self {
        Self::new(ResetErrorKind::NetworkRequestFailed)
    }

    pub fn internal() -> Self {
        Self::new(ResetErrorKind::Other("internal-error".into()))
    }
}

impl From<ProviderErrorEnvelope> for ProviderError {
    fn from(envelope: ProviderErrorEnvelope) -> Self {
        Self::new(ResetErrorKind::from_code(&envelope.error.message))
    }
}
