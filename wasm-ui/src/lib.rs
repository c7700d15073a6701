//! Web UI for bfhl-form
//!
//! A Yew-based form that posts JSON and an optional file to the /bfhl
//! endpoint and shows a filtered view of the response.

mod api;
mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
