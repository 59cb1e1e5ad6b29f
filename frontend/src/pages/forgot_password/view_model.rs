use super::{repository::ForgotPasswordRepository, utils};
use crate::{
    api::{PasswordResetProvider, ResetErrorKind},
    state::provider::use_reset_provider,
};
use leptos::*;
use std::rc::Rc;

/// The two display slots of the form. After a completed submit at most one
/// of them holds text.
#[derive(Clone, Copy)]
pub struct ResetMessages {
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl ResetMessages {
    pub fn new() -> Self {
        Self {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    pub fn clear(&self) {
        self.success.set(None);
        self.error.set(None);
    }

    pub fn show_success(&self, text: &str) {
        self.error.set(None);
        self.success.set(Some(text.to_string()));
    }

    pub fn show_error(&self, text: &str) {
        self.success.set(None);
        self.error.set(Some(text.to_string()));
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> (Option<String>, Option<String>) {
        (self.success.get_untracked(), self.error.get_untracked())
    }
}

impl Default for ResetMessages {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(ResetErrorKind),
    Blank,
}

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub messages: ResetMessages,
    pub submit_action: Action<String, SubmitOutcome>,
}

impl ForgotPasswordViewModel {
    /// Dispatches the entered email unless a previous request is still in
    /// flight. Returns whether a request was dispatched.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            log::debug!("Password reset already pending; ignoring submit");
            return false;
        }
        self.submit_action.dispatch(self.email.get_untracked());
        true
    }
}

/// Clears both slots, asks the provider for a reset email and records the
/// outcome. Provider failures never escape; they become display text.
pub async fn submit_reset_request(
    repo: &ForgotPasswordRepository,
    raw_email: &str,
    messages: ResetMessages,
) -> SubmitOutcome {
    messages.clear();

    let Some(email) = utils::normalize_email(raw_email) else {
        messages.show_error(utils::EMAIL_REQUIRED);
        return SubmitOutcome::Blank;
    };

    log::debug!("Requesting password reset email");
    match repo.request_reset(&email).await {
        Ok(()) => {
            messages.show_success(utils::RESET_LINK_SENT);
            SubmitOutcome::Sent
        }
        Err(err) => {
            messages.show_error(utils::reset_error_message(&err.kind));
            SubmitOutcome::Failed(err.kind)
        }
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    use_forgot_password_view_model_with_provider(use_reset_provider())
}

pub fn use_forgot_password_view_model_with_provider(
    provider: Rc<dyn PasswordResetProvider>,
) -> ForgotPasswordViewModel {
    let repository = ForgotPasswordRepository::new_with_provider(provider);

    let email = create_rw_signal(String::new());
    let messages = ResetMessages::new();

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let email = value.clone();
        async move { submit_reset_request(&repo, &email, messages).await }
    });

    create_effect(move |_| {
        if let Some(SubmitOutcome::Failed(kind)) = submit_action.value().get() {
            log::debug!("Password reset request failed: {}", kind.code());
        }
    });

    ForgotPasswordViewModel {
        email,
        messages,
        submit_action,
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::api::ProviderError;
    use async_trait::async_trait;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    #[derive(Default)]
    struct NeverResolves {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl PasswordResetProvider for NeverResolves {
        async fn send_password_reset_email(&self, _email: &str) -> Result<(), ProviderError> {
            self.calls.set(self.calls.get() + 1);
            futures::future::pending().await
        }
    }

    async fn yield_to_event_loop() {
        let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    #[wasm_bindgen_test]
    async fn second_submit_while_pending_is_ignored() {
        let runtime = create_runtime();
        let provider = Rc::new(NeverResolves::default());
        let vm = use_forgot_password_view_model_with_provider(provider.clone());
        vm.email.set("user@example.com".into());

        assert!(vm.submit());
        assert!(!vm.submit());
        yield_to_event_loop().await;

        assert_eq!(provider.calls.get(), 1);
        assert!(vm.submit_action.pending().get_untracked());
        runtime.dispose();
    }
}
