//! # ecoride-admin
//!
//! Leptos + WASM operator dashboard for the EcoRide mobility platform.
//!
//! This crate contains the session and navigation guard layer (persisted
//! session, auth and theme contexts, route guard), the REST client used by
//! every page, and the page shells that sit on top of them. Browser glue is
//! gated behind the `csr` feature so the rest compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
