//! # forum-client
//!
//! Leptos + WASM frontend for the forum system.
//!
//! This crate contains the routed pages, view state, and the REST types used
//! to read topics from the forum API. The `server` crate renders it with SSR
//! and the browser bundle hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let api = net::config::ApiConfig::from_document();
    log::debug!("forum api base url: {}", api.base_url());

    leptos::mount::hydrate_body(move || {
        provide_context(api);
        view! { <app::App/> }
    });
}
