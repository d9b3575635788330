//! Folio Site
//!
//! A Leptos single-page portfolio, rendered on the server (`ssr`) and
//! hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod interaction;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod routes;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    use leptos::*;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match folio_core::SiteContent::bundled() {
        Ok(content) => mount_to_body(move || view! { <App content=content/> }),
        Err(e) => tracing::error!("Bundled site content is invalid: {}", e),
    }
}
