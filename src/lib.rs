//! # venturists
//!
//! Single-page navigation for the DS Venturists site: five page sections in one
//! document, one visible at a time, switched with a directional slide and kept
//! in sync with the URL fragment.
//!
//! The navigator core (`state`, `nav`, `config`) is plain Rust and runs under
//! `cargo test`. The `csr` feature adds the `web-sys` bindings in `browser`
//! and the wasm entry point that mounts `App`.

pub mod app;
#[cfg(feature = "csr")]
pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod nav;
pub mod state;

/// Wasm entry point: logging, config, then `App` on the body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    let config = browser::read_config();
    leptos::mount::mount_to_body(move || view! { <App config/> });
}
