//! Reference playback constants

/// Default tempo in beats per minute.
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default tempo in quarter notes per second; the reference against which
/// tempo-scaled durations are computed.
pub const DEFAULT_TEMPO_BPS: f64 = 2.0;
