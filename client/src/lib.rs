//! # vieromind-client
//!
//! Leptos frontend for the Vieromind journal. Server-rendered by
//! `vieromind-server` (feature `ssr`) and hydrated in the browser (feature
//! `hydrate`).
//!
//! The dashboard talks to the journal backend directly and to the server's
//! completion proxy for reflections. All HTTP goes through the
//! [`net::http::Transport`] seam so the controller can be tested against an
//! in-memory backend.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
