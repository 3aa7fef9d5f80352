//! # student-logs
//!
//! Leptos + WASM frontend for browsing and appending student log entries.
//!
//! This crate contains the page, components, controller state, theme
//! handling, and the REST client for the `/api/v1` courses/logs backend.
//! Browser glue is gated behind the `hydrate` feature; everything else is
//! plain Rust that tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
