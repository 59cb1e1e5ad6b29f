use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Builds a future inside a fresh reactive runtime and drives it to completion
/// on the current thread, so `!Send` provider futures can touch signals.
pub fn block_on_in_runtime<Fut>(f: impl FnOnce() -> Fut) -> Fut::Output
where
    Fut: Future,
{
    with_runtime(|| futures::executor::block_on(f()))
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
