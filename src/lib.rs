//! # sou-influencer-web
//!
//! Leptos + WASM front-end for the Sou Influencer platform: authentication
//! (login, multi-step signup, password reset) and the authenticated
//! dashboard area. The client renders forms, validates input locally, calls
//! the backend HTTP API, and keeps the session token in browser storage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
