// lib.rs - Root module for the pentest_lab_web library
//
// The same crate builds twice: the `ssr` server binary links it as an rlib,
// and the `hydrate` build compiles it to WASM for the browser.

pub mod web_app;

/// Server-only pieces: environment config, the /api proxy, tracing setup
#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point, called by the hydration script cargo-leptos injects
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::hydrate_body(App);
}
