//! # client
//!
//! Leptos + WASM frontend for the Chaski Bots LAB onboarding site: landing
//! page, grade selection, login/registration, and the student dashboard.
//!
//! The crate holds the static grade catalog, the session store, the view
//! router, the REST client for the remote education backend, and the pages
//! and components that compose them. Built with `hydrate` for the browser and
//! `ssr` for the server host.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
