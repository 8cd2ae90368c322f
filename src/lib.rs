//! # goat-cg-client
//!
//! Leptos + WASM frontend for the goat-cg table designer. Replaces the
//! server-rendered script glue with a Rust-native UI layer covering table
//! selection, code/DDL generation dispatch, and the column type editor.
//!
//! This crate contains pages, components, application state, and the
//! gloo-net API helpers that talk to the code-generation endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
