//! # client
//!
//! Leptos + WASM frontend for the storefront.
//!
//! This crate contains pages, the navigation menu component, application
//! state, REST helpers, and browser utilities (cookie reads, viewport
//! detection). The `server` crate mounts it for SSR; the `hydrate`
//! feature builds the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
