//! # newsroom
//!
//! Leptos + WASM single-page client for the article management exercise:
//! a login screen and an articles CRUD screen backed by a REST API, with
//! client-side routing, a loading spinner, and a message banner.
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST API helpers. Browser-only behavior (HTTP, localStorage)
//! lives behind the `hydrate` feature so the unit test suite runs natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
