//! Per-staff skyline queried by autoplacement
//!
//! The envelope records the extents of content already placed on a staff.
//! It is shared mutable state with a strict call-order contract: the layout
//! driver visits elements left-to-right, top-to-bottom, and exactly one
//! element contributes its rectangle at a time, strictly after that
//! element's own placement is final. An element therefore sees the
//! contributions of everything placed before it in the pass and nothing
//! placed after.

use super::geometry::RectF;
use serde::{Deserialize, Serialize};

/// One horizontal span of the envelope at a fixed height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkylineSegment {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// A one-sided skyline: the top (north) or bottom (south) profile of a
/// set of rectangles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkylineLine {
    north: bool,
    segments: Vec<SkylineSegment>,
}

impl SkylineLine {
    pub fn new(north: bool) -> Self {
        SkylineLine {
            north,
            segments: Vec::new(),
        }
    }

    pub fn is_north(&self) -> bool {
        self.north
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Record the facing edge of `r`: the top edge for a north line, the
    /// bottom edge for a south line.
    pub fn add(&mut self, r: &RectF) {
        if r.width() <= 0.0 {
            return;
        }
        let y = if self.north { r.top() } else { r.bottom() };
        self.segments.push(SkylineSegment {
            x1: r.left(),
            x2: r.right(),
            y,
        });
    }

    /// Minimum signed distance to `other`, treating `self` as the lower
    /// profile of the upper content and `other` as the upper profile of
    /// the lower content. Positive means the profiles overlap vertically;
    /// `NEG_INFINITY` when they never meet horizontally.
    pub fn min_distance(&self, other: &SkylineLine) -> f64 {
        let mut dist = f64::NEG_INFINITY;
        for a in &self.segments {
            for b in &other.segments {
                if a.x1 < b.x2 && b.x1 < a.x2 {
                    dist = dist.max(a.y - b.y);
                }
            }
        }
        dist
    }
}

/// Two-sided skyline for one staff.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skyline {
    north: SkylineLine,
    south: SkylineLine,
}

impl Skyline {
    pub fn new() -> Self {
        Skyline {
            north: SkylineLine::new(true),
            south: SkylineLine::new(false),
        }
    }

    pub fn north(&self) -> &SkylineLine {
        &self.north
    }

    pub fn south(&self) -> &SkylineLine {
        &self.south
    }

    /// Contribute a placed element's rectangle to both profiles. Call only
    /// after the element's placement is final.
    pub fn add(&mut self, r: &RectF) {
        self.north.add(r);
        self.south.add(r);
    }
}

impl Default for Skyline {
    fn default() -> Self {
        Self::new()
    }
}
