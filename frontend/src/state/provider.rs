use crate::{
    api::{IdentityClient, PasswordResetProvider},
    config,
};
use leptos::*;
use std::rc::Rc;

/// Shared handle to the identity provider, injected once at the app root.
#[derive(Clone)]
pub struct ResetProviderContext(pub Rc<dyn PasswordResetProvider>);

pub fn provide_reset_provider(provider: Rc<dyn PasswordResetProvider>) {
    provide_context(ResetProviderContext(provider));
}

pub fn use_reset_provider() -> Rc<dyn PasswordResetProvider> {
    match use_context::<ResetProviderContext>() {
        Some(ctx) => ctx.0,
        None => Rc::new(IdentityClient::new(config::app_config())),
    }
}
