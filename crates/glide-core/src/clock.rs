//! Animation timeline primitives.
//!
//! # Design
//!
//! Time is represented as a `Timestamp` — fractional seconds on the host's
//! monotonic timeline.  The engine never reads a clock itself: every
//! time-dependent operation takes an explicit `now: Timestamp` parameter, so
//! all interpolation and completion logic is a pure function of its inputs
//! and tests can drive any scenario with hand-written timestamps.
//!
//! `AnimClock` is the one piece that touches the real clock; hosts create it
//! once and read `now()` each frame.

use std::fmt;
use std::time::Instant;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A point on the animation timeline, in seconds.
///
/// Only differences between timestamps are meaningful; the zero point is
/// whatever the host's `AnimClock` was created at.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    /// Seconds elapsed from `earlier` to `self`, clamped at zero so a
    /// just-started animation never reports negative elapsed time.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl std::ops::Add<f64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, secs: f64) -> Timestamp {
        Timestamp(self.0 + secs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── AnimClock ─────────────────────────────────────────────────────────────────

/// Monotonic timestamp source for hosts driving the engine in real time.
///
/// Cheap to copy around; tests never need one.
#[derive(Clone, Debug)]
pub struct AnimClock {
    origin: Instant,
}

impl AnimClock {
    /// Create a clock whose `Timestamp::ZERO` is the moment of creation.
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }

    /// The current timestamp on this clock's timeline.
    #[inline]
    pub fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed().as_secs_f64())
    }
}

impl Default for AnimClock {
    fn default() -> Self {
        Self::start()
    }
}
