use crate::api::{PasswordResetProvider, ProviderError};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    provider: Rc<dyn PasswordResetProvider>,
}

impl ForgotPasswordRepository {
    pub fn new_with_provider(provider: Rc<dyn PasswordResetProvider>) -> Self {
        Self { provider }
    }

    pub async fn request_reset(&self, email: &str) -> Result<(), ProviderError> {
        self.provider.send_password_reset_email(email).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{IdentityClient, ResetErrorKind};
    use crate::config::AppConfig;
    use httpmock::prelude::*;

    fn repository(server: &MockServer) -> ForgotPasswordRepository {
        ForgotPasswordRepository::new_with_provider(Rc::new(IdentityClient::new_with_base_url(
            &AppConfig::default(),
            server.base_url(),
        )))
    }

    #[tokio::test]
    async fn request_reset_calls_identity_provider() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/accounts:sendOobCode");
                then.status(200)
                    .json_body(serde_json::json!({ "email": "user@example.com" }));
            })
            .await;

        let repo = repository(&server);
        repo.request_reset("user@example.com").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn request_reset_propagates_classification() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/accounts:sendOobCode");
                then.status(400).json_body(serde_json::json!({
                    "error": { "code": 400, "message": "INVALID_EMAIL" }
                }));
            })
            .await;

        let repo = repository(&server);
        let error = repo
            .request_reset("not-an-email")
            .await
            .expect_err("should return provider error");
        assert_eq!(error.kind, ResetErrorKind::InvalidEmail);
    }
}
