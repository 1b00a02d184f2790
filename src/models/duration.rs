//! Musical-time durations as exact rationals
//!
//! Durations are stored in whole-note units so that tempo-scaled spans
//! stay exact until the final tick conversion.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

/// Absolute time position, in ticks.
pub type Ticks = i64;

/// Ticks per quarter note.
pub const DIVISION: i64 = 480;

/// A duration in whole-note units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fraction(Rational64);

impl Fraction {
    /// Duration of zero length.
    pub fn zero() -> Self {
        Fraction(Rational64::new(0, 1))
    }

    pub fn new(numerator: i64, denominator: i64) -> Self {
        Fraction(Rational64::new(numerator, denominator))
    }

    /// Build from an absolute tick count (`DIVISION` ticks per quarter).
    pub fn from_ticks(ticks: Ticks) -> Self {
        Fraction(Rational64::new(ticks, DIVISION * 4))
    }

    /// Absolute tick count, truncated toward zero.
    pub fn ticks(&self) -> Ticks {
        (self.0 * Rational64::from_integer(DIVISION * 4)).to_integer()
    }

    pub fn is_zero(&self) -> bool {
        *self.0.numer() == 0
    }

    /// Floating-point value for display and debugging.
    pub fn to_f64(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }
}
