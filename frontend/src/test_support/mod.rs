#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{PasswordResetProvider, ProviderError, ResetErrorKind};
    use crate::pages::forgot_password::ResetMessages;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Snapshot of the two message slots taken while the provider call is in flight.
    pub type MessageSnapshot = (Option<String>, Option<String>);

    pub struct MockResetProvider {
        outcome: Result<(), ProviderError>,
        calls: RefCell<Vec<String>>,
        watched: RefCell<Option<ResetMessages>>,
        snapshots: RefCell<Vec<MessageSnapshot>>,
    }

    impl MockResetProvider {
        pub fn with_outcome(outcome: Result<(), ProviderError>) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
                watched: RefCell::new(None),
                snapshots: RefCell::new(Vec::new()),
            }
        }

        pub fn succeeding() -> Self {
            Self::with_outcome(Ok(()))
        }

        pub fn failing(kind: ResetErrorKind) -> Self {
            Self::with_outcome(Err(ProviderError::new(kind)))
        }

        pub fn watch(&self, messages: ResetMessages) {
            *self.watched.borrow_mut() = Some(messages);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn snapshots(&self) -> Vec<MessageSnapshot> {
            self.snapshots.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl PasswordResetProvider for MockResetProvider {
        async fn send_password_reset_email(&self, email: &str) -> Result<(), ProviderError> {
            self.calls.borrow_mut().push(email.to_string());
            if let Some(messages) = *self.watched.borrow() {
                self.snapshots.borrow_mut().push(messages.snapshot());
            }
            self.outcome.clone()
        }
    }
}
