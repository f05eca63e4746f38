//! Page interaction layer for the MX Detail marketing site.
//!
//! Ships as a wasm module that enhances the static markup the site already
//! serves: navbar scroll state, the mobile menu and its focus trap, scroll
//! reveals, package accordions, the mobile parallax fallback, and smooth
//! in-page anchor scrolling. The crate renders nothing itself; a missing
//! piece of markup leaves that behavior inert.
//!
//! This crate is intentionally a stub by default so it builds (and the model
//! tests run) on native targets without a wasm toolchain.
//!
//! Enable the real layer with: `--features web` (and a wasm32 target).

pub mod model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
