//! Dynamic Marking Engraving WASM Module
//!
//! Models a dynamic marking (p, f, sfz, ...) as a notational element that
//! carries a playback-velocity semantic and an engraving placement rule.
//! The module computes positions and ratios only; turning them into pixels
//! is the host renderer's job.

pub mod api;
pub mod fonts;
pub mod io;
pub mod layout;
pub mod models;
pub mod playback;
pub mod properties;

// Re-export commonly used types
pub use models::catalog::{self, CatalogEntry};
pub use models::dynamics::{Dynamic, DynamicKind, DynamicRange, DynamicSpeed};
pub use models::text_base::{Align, Placement, TextElement};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Dynamics engraving WASM module initialized");
}
