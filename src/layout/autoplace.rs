//! Vertical collision avoidance against the staff skyline
//!
//! The marking's rectangle is measured in system coordinates, compared to
//! the skyline on its placement side, and shifted away from the staff by
//! exactly the amount that restores the style's minimum clearance.

use super::skyline::{Skyline, SkylineLine};
use super::{SegmentView, StaffContext};
use crate::models::dynamics::Dynamic;
use crate::models::style::Style;
use crate::models::text_base::Placement;

/// Shift the marking clear of the skyline. Runs after horizontal layout;
/// contributing the final rectangle back to the skyline is the caller's
/// job, after this element's placement is final.
pub fn autoplace(
    dynamic: &mut Dynamic,
    segment: &SegmentView,
    staff: &StaffContext,
    skyline: &Skyline,
    style: &Style,
) {
    if !dynamic.text.autoplace {
        return;
    }

    let min_distance = style.dynamics_min_distance * staff.spatium;

    let mut r = dynamic.text.bbox.translated(
        dynamic.text.pos + segment.pos + segment.measure_pos,
    );

    // Measure from the unshifted baseline: the manual vertical offset is
    // undone before the skyline query and reapplied as part of the
    // computed position, keeping repeated passes idempotent.
    let y_off = dynamic.text.offset.y - style.dynamics_offset.y;
    r.translate(0.0, -y_off);

    let above = dynamic.text.placement == Placement::Above;
    let mut sk = SkylineLine::new(!above);
    sk.add(&r);

    if above {
        let d = sk.min_distance(skyline.north());
        if d > -min_distance {
            dynamic.text.pos.y += -(d + min_distance);
        }
    } else {
        let d = skyline.south().min_distance(&sk);
        if d > -min_distance {
            dynamic.text.pos.y += d + min_distance;
        }
    }
}
