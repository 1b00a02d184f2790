//! Engraving layout passes for dynamic markings
//!
//! A marking is laid out once per pass: the text base resets its position,
//! horizontal anchoring aligns it to the notehead's visual center, then
//! autoplacement shifts it clear of the staff skyline. The layout driver
//! visits elements left-to-right, top-to-bottom; ordering is load-bearing
//! for the skyline (see `skyline`).

pub mod autoplace;
pub mod geometry;
pub mod horizontal;
pub mod skyline;

use crate::models::duration::Ticks;
use crate::models::dynamics::Dynamic;
use crate::models::style::Style;
use geometry::PointF;
use serde::{Deserialize, Serialize};
use skyline::Skyline;

/// Number of parallel voices sharing a staff position.
pub const VOICES: usize = 4;

/// Reference staff space for a 20pt staff. Magnifications are expressed
/// against this value so cue-sized and reduced staves scale correctly.
pub const SPATIUM20: f64 = 5.0;

/// A voice-slot occupant at a segment, as seen by the dynamics layout.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SegmentElement {
    /// Whether the element is a note-bearing chord (vs. a rest etc.).
    pub is_chord: bool,
    /// Rendered width in absolute units.
    pub width: f64,
}

/// View of the segment a marking is attached to. The segment itself is
/// owned by the score; layout only reads it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentView {
    /// Voice slots at this time position, lowest voice first.
    pub elements: [Option<SegmentElement>; VOICES],
    /// Segment origin relative to its measure.
    pub pos: PointF,
    /// Measure origin relative to the system.
    pub measure_pos: PointF,
    /// Time position of the segment.
    pub tick: Ticks,
}

impl SegmentView {
    pub fn new(tick: Ticks) -> Self {
        SegmentView {
            elements: [None; VOICES],
            pos: PointF::default(),
            measure_pos: PointF::default(),
            tick,
        }
    }
}

/// Per-staff state consulted during layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaffContext {
    /// Staff space in absolute units, reflecting the physical staff size.
    pub spatium: f64,
}

impl Default for StaffContext {
    fn default() -> Self {
        StaffContext { spatium: SPATIUM20 }
    }
}

/// Full per-element layout pass. A detached marking (no segment) sits at
/// the origin; an attached one is anchored horizontally and then placed
/// clear of the skyline.
pub fn layout_dynamic(
    dynamic: &mut Dynamic,
    segment: Option<&SegmentView>,
    staff: &StaffContext,
    skyline: &Skyline,
    style: &Style,
) {
    dynamic.text.reset_layout();
    let Some(segment) = segment else {
        dynamic.text.pos = PointF::default();
        return;
    };
    horizontal::layout_horizontal(dynamic, segment, staff, style);
    autoplace::autoplace(dynamic, segment, staff, skyline, style);
}
