pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
#[cfg(feature = "ssr")]
pub mod middleware;
pub mod server_fn;
pub mod state;
pub mod types;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
