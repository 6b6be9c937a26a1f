//! # kabinet
//!
//! Leptos + WASM single-page client for the account service ("Личный
//! кабинет"): a tabbed login/register card backed by one remote JSON
//! endpoint, and a profile card once signed in.
//!
//! The crate compiles natively with default features (that is what the test
//! suite runs against); the `csr` feature wires the browser-only
//! dependencies and the wasm entry point below.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs the panic hook and console logger, then
/// mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
