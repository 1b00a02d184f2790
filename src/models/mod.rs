//! Data model for dynamic markings
//!
//! The catalog is the immutable ground truth for every dynamic kind; the
//! `Dynamic` entity layers explicit overrides and a composed text base on
//! top of it.

pub mod catalog;
pub mod duration;
pub mod dynamics;
pub mod style;
pub mod text_base;

pub use catalog::CatalogEntry;
pub use duration::{Fraction, Ticks, DIVISION};
pub use dynamics::{Dynamic, DynamicKind, DynamicRange, DynamicSpeed};
pub use style::Style;
pub use text_base::{Align, Placement, TextElement};
