//! # client
//!
//! Leptos + WASM front end for the research-community portal: signup and
//! login, events, projects, the document library, profiles and the
//! administration console.
//!
//! Pages and components render against the shared `records` model; `net`
//! executes `records::endpoints` descriptors in the browser and `state`
//! holds the reactive models provided through context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
