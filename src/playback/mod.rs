//! Playback support: tempo lookup and reference constants
//!
//! The velocity model only needs the tempo in effect at the marking's time
//! position; the full playback mapping happens outside this module.

pub mod defaults;
pub mod tempo;

pub use tempo::{TempoEvent, TempoMap};
