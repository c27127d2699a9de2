//! # client
//!
//! Leptos + WASM frontend for Lumina: the marketing pages, the auth screens,
//! and the signed-in dashboard and generation wizard.
//!
//! Compiled twice: with the `ssr` feature into the server binary for HTML
//! rendering, and with the `hydrate` feature to WASM for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
