//! Simulation time model.
//!
//! # Design
//!
//! Boarding time is continuous: task start offsets are whole stagger steps
//! but walk durations are `distance / speed`, so the canonical unit is a
//! real-valued `SimTime` measured in seconds from the start of boarding.
//!
//! `SimTime` implements `Ord` via [`f64::total_cmp`] so it can key ordered
//! collections.  Constructors reject NaN, which keeps that ordering
//! meaningful.
//!
//! The clock never advances on its own.  The host drives it with
//! [`SimClock::advance`] from whatever periodic wake mechanism it has
//! (an animation frame, a fixed-step loop, a test).

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulation time in seconds since boarding started.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap `secs`.  NaN and negative values collapse to zero.
    #[inline]
    pub fn from_secs(secs: f64) -> SimTime {
        if secs.is_nan() || secs < 0.0 {
            SimTime::ZERO
        } else {
            SimTime(secs)
        }
    }

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Return the time `secs` after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime::from_secs(self.0 + secs)
    }

    /// Seconds elapsed from `earlier` to `self`, floored at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.offset(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Elapsed simulated time for one boarding run.
///
/// `SimClock` is cheap to copy and holds no heap data.  Freezing (pause) is
/// the owner's job: a paused timeline simply stops calling `advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Advance the clock by `dt` seconds.  Negative or NaN steps are ignored.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.now = self.now.offset(dt);
        }
    }

    /// Jump straight to `t`.  Used by seek-to-end; never moves backwards.
    #[inline]
    pub fn jump_to(&mut self, t: SimTime) {
        if t > self.now {
            self.now = t;
        }
    }

    /// Back to time zero.
    #[inline]
    pub fn rewind(&mut self) {
        self.now = SimTime::ZERO;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.as_secs();
        let minutes = (secs / 60.0).floor() as u64;
        write!(f, "{} ({}m{:04.1}s)", self.now, minutes, secs - minutes as f64 * 60.0)
    }
}
