//! # client
//!
//! Leptos + WASM frontend for the UserDb console: login, signup and a CRUD
//! dashboard over a remote GraphQL backend.
//!
//! This crate contains pages, components, session state, the GraphQL gateway
//! and its wire types. The root `userdb-console` binary server-renders `App`
//! and the `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
