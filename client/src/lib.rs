//! # client
//!
//! Leptos + WASM frontend for the NGO site's admin surface.
//!
//! This crate contains the app router, the `ProtectedRoute` gate component,
//! the pages it guards, session state, and the REST helpers used by the gate's
//! `verify_auth` check. Gate semantics (state machine, liveness, redirect
//! rules) come from the `ngo-site` core crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
