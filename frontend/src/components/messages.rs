use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    fn class(self) -> &'static str {
        match self {
            MessageTone::Success => "mt-4 text-sm font-medium text-green-600",
            MessageTone::Error => "mt-4 text-sm font-medium text-red-600",
        }
    }

    fn role(self) -> &'static str {
        match self {
            MessageTone::Success => "status",
            MessageTone::Error => "alert",
        }
    }
}

/// One colored line of text, rendered only while `message` holds non-empty text.
#[component]
pub fn StatusMessage(message: Signal<Option<String>>, tone: MessageTone) -> impl IntoView {
    let visible = move || message.with(|m| m.as_deref().is_some_and(|text| !text.is_empty()));

    view! {
        <Show when=visible fallback=|| ()>
            <p class=tone.class() role=tone.role()>
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
