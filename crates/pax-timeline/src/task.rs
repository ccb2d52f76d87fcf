//! Per-passenger timed tasks.

use pax_core::{PassengerId, SimTime};

use crate::{TimelineError, TimelineResult};

/// Timing constants for building tasks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimelineConfig {
    /// Distance units walked per second.  `duration = distance / speed`.
    pub walking_speed: f64,
    /// Seconds between consecutive task starts.
    pub stagger: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            walking_speed: 10.0,
            stagger:       1.0,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> TimelineResult<()> {
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(TimelineError::Config(format!(
                "walking_speed must be positive, got {}",
                self.walking_speed
            )));
        }
        if !(self.stagger.is_finite() && self.stagger >= 0.0) {
            return Err(TimelineError::Config(format!(
                "stagger must be non-negative, got {}",
                self.stagger
            )));
        }
        Ok(())
    }
}

/// One passenger's walk on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub passenger: PassengerId,
    pub start:     SimTime,
    /// Seconds; never negative.
    pub duration:  f64,
    pub(crate) started:   bool,
    pub(crate) completed: bool,
}

impl Task {
    pub(crate) fn new(passenger: PassengerId, start: SimTime, duration: f64) -> Self {
        Self { passenger, start, duration, started: false, completed: false }
    }

    #[inline]
    pub fn end(&self) -> SimTime {
        self.start + self.duration
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Fraction of the walk done at `now`, in `[0, 1]`.
    ///
    /// Follows fired events rather than the raw clock, so a task whose start
    /// has not fired yet reports `0.0` and a completed task `1.0`.
    pub fn progress(&self, now: SimTime) -> f64 {
        if self.completed {
            return 1.0;
        }
        if !self.started {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        (now.since(self.start) / self.duration).min(1.0)
    }
}
