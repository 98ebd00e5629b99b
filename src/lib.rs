//! # portico
//!
//! Leptos + WASM front-end for account registration and sign-in.
//!
//! The decision logic lives in [`pages::register_flow`]; everything else
//! is routing, shared state, and presentational glue around the
//! authentication API. Native builds compile the same modules with inert
//! network stubs so the contract tests run on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and logging, then mount
/// the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portico {} starting", env!("CARGO_PKG_VERSION"));
    leptos::prelude::mount_to_body(app::App);
}
