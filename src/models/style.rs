//! Engraving style values consumed by dynamics
//!
//! The score-wide style sheet lives outside this module; this is the slice
//! a dynamic marking reads during layout.

use super::text_base::Placement;
use crate::layout::geometry::PointF;
use crate::layout::SPATIUM20;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Style {
    /// Default placement side for dynamics.
    pub dynamics_placement: Placement,
    /// Minimum skyline clearance, in staff spaces.
    pub dynamics_min_distance: f64,
    /// Style-default offset of a dynamic from its anchor, absolute units.
    pub dynamics_offset: PointF,
    /// Notehead width at the reference staff space, absolute units.
    pub notehead_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            dynamics_placement: Placement::Below,
            dynamics_min_distance: 0.5,
            dynamics_offset: PointF::default(),
            notehead_width: 1.3 * SPATIUM20,
        }
    }
}
