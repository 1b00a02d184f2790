//! SMuFL glyph identifiers and metrics for dynamics engraving

pub mod glyphs;
pub mod metrics;

pub use glyphs::SymId;
pub use metrics::{glyph_metrics, GlyphMetrics};
