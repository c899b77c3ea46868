//! # portal-client
//!
//! Leptos + WASM frontend for the user-account portal: registration, login,
//! and a session-guarded profile dashboard.
//!
//! This crate contains pages, components, application state, the session
//! store, and the REST API bindings. The auth flow is a small state machine
//! (`state::auth`) whose settled states drive the route guard
//! (`components::auth_gate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
