//! # wishingwall-client
//!
//! Leptos + WASM frontend for WishingWall: owner login and dashboard, wall
//! administration, the passcode-gated public wall and the contribution form.
//!
//! The crate is built twice: with `hydrate` into the browser bundle, and with
//! `ssr` as a library the host server renders from. Everything that touches
//! the browser or the remote API is gated on `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
