//! ReliefMate AI - landing page
//!
//! Server-rendered marketing page for the ReliefMate AI disaster-relief
//! assistant, built with Leptos and hydrated with WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
