use async_trait::async_trait;
use reqwest::Client;

use crate::{api::types::*, config::AppConfig};

const LOCALE_HEADER: &str = "X-Firebase-Locale";

/// The identity provider operation the reset form depends on.
#[async_trait(?Send)]
pub trait PasswordResetProvider {
    async fn send_password_reset_email(&self, email: &str) -> Result<(), ProviderError>;
}

/// Identity Toolkit REST client bound to one project's API key.
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
    continue_url: Option<String>,
    language_code: Option<String>,
}

impl IdentityClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::new_with_base_url(config, config.identity_base_url.clone())
    }

    pub fn new_with_base_url(config: &AppConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: config.firebase.api_key.clone(),
            continue_url: config.continue_url.clone(),
            language_code: config.language_code.clone(),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn send_oob_code_url(&self) -> String {
        format!("{}/v1/accounts:sendOobCode", self.base_url)
    }
}

#[async_trait(?Send)]
impl PasswordResetProvider for IdentityClient {
    async fn send_password_reset_email(&self, email: &str) -> Result<(), ProviderError> {
        let body = SendOobCodeRequest::password_reset(email, self.continue_url.clone());
        let mut request = self
            .http_client()
            .post(self.send_oob_code_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body);
        if let Some(locale) = &self.language_code {
            request = request.header(LOCALE_HEADER, locale);
        }

        let response = request.send().await.map_err(|e| {
            log::debug!("Request failed: {}", e);
            ProviderError::network()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let envelope: ProviderErrorEnvelope = response.json().await.map_err(|e| {
            log::debug!("Failed to parse error ({}): {}", status, e);
            ProviderError::internal()
        })?;
        Err(envelope.into())
    }
}
