//! Tempo lookup along the score timeline
//!
//! The real tempo map belongs to the score; this is the lookup surface the
//! velocity model consumes, with a flat default when no events exist.

use super::defaults::DEFAULT_TEMPO_BPS;
use crate::models::duration::Ticks;
use serde::{Deserialize, Serialize};

/// A tempo in effect from `tick` onward, in quarter notes per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TempoEvent {
    pub tick: Ticks,
    pub bps: f64,
}

/// Piecewise-constant tempo over ticks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TempoMap {
    events: Vec<TempoEvent>,
}

impl TempoMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the tempo taking effect at `tick`.
    pub fn set_tempo(&mut self, tick: Ticks, bps: f64) {
        match self.events.binary_search_by_key(&tick, |e| e.tick) {
            Ok(i) => self.events[i].bps = bps,
            Err(i) => self.events.insert(i, TempoEvent { tick, bps }),
        }
    }

    /// Tempo in effect at `tick`; the default tempo before any event.
    pub fn tempo_at(&self, tick: Ticks) -> f64 {
        match self.events.binary_search_by_key(&tick, |e| e.tick) {
            Ok(i) => self.events[i].bps,
            Err(0) => DEFAULT_TEMPO_BPS,
            Err(i) => self.events[i - 1].bps,
        }
    }
}
