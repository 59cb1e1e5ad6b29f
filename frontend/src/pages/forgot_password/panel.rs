use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::components::messages::{MessageTone, StatusMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    view! { <ForgotPasswordForm vm=vm /> }
}

#[component]
pub fn ForgotPasswordForm(vm: ForgotPasswordViewModel) -> impl IntoView {
    let email = vm.email;
    let messages = vm.messages;
    let pending = vm.submit_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                    "Forgot Password"
                </h2>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div>
                        <label for="reset-email" class="block text-sm font-medium text-gray-700">
                            "Email:"
                        </label>
                        <input
                            id="reset-email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required
                            class="appearance-none rounded-md relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                </form>
                <StatusMessage message=messages.success.into() tone=MessageTone::Success />
                <StatusMessage message=messages.error.into() tone=MessageTone::Error />
            </div>
        </div>
    }
}
