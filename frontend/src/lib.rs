mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
mod test_support;
pub mod utils;

/// Entry point called from the binary.
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }
    log::info!("Starting WFH frontend");

    // `window.__WFH_ENV` wins over `./config.json`; both are optional.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
