//! # circles
//!
//! Leptos + WASM front-end for the circles canvas: an "Add circle" button and
//! a slide area where circles can be selected, dragged as a group, and deleted
//! with the keyboard.
//!
//! All interaction state lives in the `canvas` crate's `EngineCore`; this
//! crate measures the container, forwards DOM events, and draws the
//! resulting shape views.

pub mod app;
pub mod components;
pub mod util;

/// Browser entry point: logging, config, and mounting the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let loaded = util::config_source::load();
    let config = loaded.as_ref().map_or_else(|_| canvas::config::CanvasConfig::default(), Clone::clone);
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"circles: logger already installed".into());
    }
    if let Err(err) = &loaded {
        log::warn!("falling back to default config: {err}");
    }

    let seed = util::dom_input::entropy_seed();
    log::info!("starting circles (group_drag={:?})", config.group_drag);
    leptos::mount::mount_to_body(move || view! { <app::App config seed/> });
}
