use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    api::IdentityClient, config, pages::forgot_password::ForgotPasswordPage,
    state::provider::provide_reset_provider,
};

pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

pub const ROUTE_PATHS: &[&str] = &["/", FORGOT_PASSWORD_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_reset_provider(Rc::new(IdentityClient::new(config::app_config())));
    view! {
        <Router>
            <Routes>
                <Route path="/" view=ForgotPasswordPage/>
                <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
            </Routes>
        </Router>
    }
}
