//! # client
//!
//! Leptos + WASM frontend for the ThinkFlow project-kickstart assistant.
//!
//! Four routed pages carry a team from setup (industry, members, skills)
//! through a quadrant whiteboard brainstorm to an AI-generated project plan:
//! pages, components, session-snapshot state, the HTTP gateway layer, and
//! browser-environment utilities live here. The whiteboard's domain logic
//! (notes, quadrant geometry, the placement-tool state machine) comes from
//! the `board` crate.
//!
//! Browser-only dependencies are feature-gated behind `hydrate` with
//! SSR-safe stubs, so the crate compiles and its logic tests run on the
//! host with no features enabled.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: install panic/console logging hooks and hydrate
/// the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
