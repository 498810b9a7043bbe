//! # client
//!
//! Leptos frontend for the campus map. The [`components::map_viewer::MapViewer`]
//! component hosts a `viewer::engine::ViewerCore`, renders the page image with
//! its overlays, and forwards overlay clicks to the caller through callbacks.
//! [`app::App`] is a small host page that wires the viewer to the builtin
//! registry.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
