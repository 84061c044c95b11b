//! rollcall web server and UI.
//!
//! This crate serves the public pages of the rollcall attendance portal
//! and the role-aware sign-in flow built on `rollcall-platform-access`.

#![allow(non_snake_case)]

pub mod app;
pub mod error;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
