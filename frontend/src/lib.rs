use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;
pub mod utils;

/// Entry point of the browser bundle.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting Talentrack absence client");

    // Resolve the API base URL in the background; requests wait for it.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
