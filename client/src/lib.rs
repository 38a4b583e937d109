//! # client
//!
//! Leptos + WASM frontend for ManuTrack, a maintenance task tracker.
//!
//! This crate contains the route table and guards, pages, components, the
//! auth store, and the REST client for the external maintenance API. The
//! `hydrate` feature builds the browser bundle; `ssr` lets the host render
//! the same `App`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("manutrack client using API at {}", config::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
