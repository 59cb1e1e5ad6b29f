use web_sys::console;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }

    config::init();
    log::info!("Starting Reset Portal frontend (wasm)");
    router::mount_app();
}
