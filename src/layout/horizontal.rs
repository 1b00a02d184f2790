//! Horizontal anchoring against the notehead's visual center
//!
//! A centered dynamic first shifts half a notehead to the right, which
//! centers it under the notehead's geometric middle. Composite glyphs
//! (sfz, fp) are visually lopsided, so the glyph's optical-center anchor
//! then corrects the residual error between the ink box center and the
//! point where the symbol reads as centered.

use super::{SegmentView, StaffContext, SPATIUM20};
use crate::fonts::metrics::glyph_metrics;
use crate::models::catalog;
use crate::models::dynamics::Dynamic;
use crate::models::style::Style;
use crate::models::text_base::{Align, DEFAULT_FONT_SIZE};

/// Anchor the marking horizontally at its segment. Runs after the text
/// base has computed the intrinsic box; a segment with no occupied voice
/// leaves the text-base position untouched.
pub fn layout_horizontal(
    dynamic: &mut Dynamic,
    segment: &SegmentView,
    staff: &StaffContext,
    style: &Style,
) {
    // First occupied voice wins; lowest voice index is the tie-break.
    let Some(element) = segment.elements.iter().flatten().next() else {
        return;
    };

    if element.is_chord && dynamic.text.align == Align::Center {
        // Magnification from the physical staff size. The chord's own
        // magnification would distort on cue notes and small staves.
        let mag = staff.spatium / SPATIUM20;

        let notehead_width = style.notehead_width * mag;
        dynamic.text.pos.x += notehead_width * 0.5;

        let sym = catalog::lookup(dynamic.kind()).sym;
        let metrics = glyph_metrics();
        if let (Some(anchor_x), Some(glyph_box)) = (metrics.optical_center_x(sym), metrics.bbox(sym))
        {
            let font_scale = dynamic.text.size / DEFAULT_FONT_SIZE;
            let optical_center = anchor_x * mag * font_scale;
            // Negative: glyph boxes are measured from a centered origin.
            let left = glyph_box.bottom_left().x * mag * font_scale;

            let correction = optical_center - left - dynamic.text.bbox.width() * 0.5;
            dynamic.text.pos.x -= correction;
        }
    } else {
        dynamic.text.pos.x += element.width * 0.5;
    }
}
