use leptos::*;
use leptos_meta::Title;

mod panel;
mod repository;
mod utils;
mod view_model;

pub use panel::ForgotPasswordPanel;

#[cfg(test)]
pub(crate) use view_model::ResetMessages;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <Title text="Forgot Password" />
        <ForgotPasswordPanel />
    }
}
