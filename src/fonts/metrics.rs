//! Glyph metrics service for dynamics symbols
//!
//! Bounding boxes and optical-center anchors come from the notation font's
//! SMuFL metadata (staff-space units, y up). The table is embedded at
//! build time, parsed once, and served in absolute engraving units at the
//! reference staff space (y down).

use super::glyphs::SymId;
use crate::layout::geometry::{PointF, RectF};
use crate::layout::SPATIUM20;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct RawAnchors {
    #[serde(rename = "opticalCenter")]
    optical_center: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct RawBBox {
    #[serde(rename = "bBoxNE")]
    ne: [f64; 2],
    #[serde(rename = "bBoxSW")]
    sw: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(rename = "glyphsWithAnchors", default)]
    anchors: HashMap<String, RawAnchors>,
    #[serde(rename = "glyphBBoxes", default)]
    bboxes: HashMap<String, RawBBox>,
}

/// Parsed metrics for the dynamics glyph set.
#[derive(Debug)]
pub struct GlyphMetrics {
    anchors: HashMap<String, PointF>,
    bboxes: HashMap<String, RectF>,
}

static METRICS: Lazy<GlyphMetrics> = Lazy::new(|| {
    GlyphMetrics::parse(include_str!("metrics.json")).expect("embedded glyph metadata is well-formed")
});

/// Shared metrics table for the embedded notation font.
pub fn glyph_metrics() -> &'static GlyphMetrics {
    &METRICS
}

impl GlyphMetrics {
    /// Parse SMuFL-style metadata JSON, converting staff spaces (y up) to
    /// absolute engraving units at the reference staff space (y down).
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawMetadata = serde_json::from_str(json)?;
        let anchors = raw
            .anchors
            .into_iter()
            .filter_map(|(name, a)| {
                a.optical_center
                    .map(|[x, y]| (name, PointF::new(x * SPATIUM20, -y * SPATIUM20)))
            })
            .collect();
        let bboxes = raw
            .bboxes
            .into_iter()
            .map(|(name, b)| {
                let rect = RectF::new(
                    b.sw[0] * SPATIUM20,
                    -b.ne[1] * SPATIUM20,
                    (b.ne[0] - b.sw[0]) * SPATIUM20,
                    (b.ne[1] - b.sw[1]) * SPATIUM20,
                );
                (name, rect)
            })
            .collect();
        Ok(GlyphMetrics { anchors, bboxes })
    }

    /// Optical-center anchor x in absolute units at the reference staff
    /// space; `None` when the font defines no anchor for the glyph.
    pub fn optical_center_x(&self, sym: SymId) -> Option<f64> {
        if sym == SymId::NoSym {
            return None;
        }
        self.anchors.get(sym.smufl_name()).map(|p| p.x)
    }

    /// Ink bounding box in absolute units at the reference staff space.
    pub fn bbox(&self, sym: SymId) -> Option<RectF> {
        self.bboxes.get(sym.smufl_name()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses() {
        let metrics = glyph_metrics();
        assert!(metrics.optical_center_x(SymId::DynamicMF).is_some());
        assert!(metrics.bbox(SymId::DynamicMF).is_some());
    }

    #[test]
    fn test_no_sym_has_no_metrics() {
        let metrics = glyph_metrics();
        assert_eq!(metrics.optical_center_x(SymId::NoSym), None);
        assert_eq!(metrics.bbox(SymId::NoSym), None);
    }

    #[test]
    fn test_catalog_syms_all_have_boxes() {
        use crate::models::{catalog, dynamics::DynamicKind};
        let metrics = glyph_metrics();
        for kind in DynamicKind::ALL {
            let sym = catalog::lookup(kind).sym;
            if sym != SymId::NoSym {
                assert!(metrics.bbox(sym).is_some(), "missing bbox for {sym:?}");
                assert!(
                    metrics.optical_center_x(sym).is_some(),
                    "missing anchor for {sym:?}"
                );
            }
        }
    }

    #[test]
    fn test_units_scale_to_reference_spatium() {
        let json = r#"{
            "glyphsWithAnchors": { "dynamicForte": { "opticalCenter": [0.4, 0.0] } },
            "glyphBBoxes": { "dynamicForte": { "bBoxNE": [1.0, 1.5], "bBoxSW": [-0.5, -0.5] } }
        }"#;
        let metrics = GlyphMetrics::parse(json).unwrap();
        assert_eq!(metrics.optical_center_x(SymId::DynamicForte), Some(0.4 * SPATIUM20));
        let bbox = metrics.bbox(SymId::DynamicForte).unwrap();
        assert_eq!(bbox.left(), -0.5 * SPATIUM20);
        assert_eq!(bbox.top(), -1.5 * SPATIUM20);
        assert_eq!(bbox.width(), 1.5 * SPATIUM20);
        assert_eq!(bbox.height(), 2.0 * SPATIUM20);
    }
}
