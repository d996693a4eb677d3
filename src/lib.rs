//! # gopanel-web
//!
//! Leptos + WASM frontend for the gopanel server dashboard.
//!
//! The core is the session store (`state::session`) and the navigation guard
//! (`nav`). Pages, the REST helpers, and the root `App` are the thin shell
//! that runs them in a browser.

pub mod app;
pub mod config;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
