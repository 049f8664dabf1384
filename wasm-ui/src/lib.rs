//! Web UI for agenda-rs
//!
//! A Yew-based booking page: service cards with a running total, a date
//! picker backed by the occupied-slots endpoint, and the registration
//! and login forms with their password hints.

mod api;
mod app;
mod components;
mod register;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Panics show up in the browser console
    console_error_panic_hook::set_once();

    // Mounts on <body>, replacing the static booking page
    yew::Renderer::<app::App>::new().render();
}
