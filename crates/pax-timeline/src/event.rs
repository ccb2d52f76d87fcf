//! Timeline events and the observer that receives them.

use pax_core::{PassengerId, SimTime};

/// Which edge of a passenger's task fired.
///
/// Declaration order matters: `Start < Complete`, so a zero-length walk
/// still starts before it completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// The passenger leaves the door.
    Start,
    /// The passenger reaches the seat.
    Complete,
}

/// One fired state transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEvent {
    pub passenger: PassengerId,
    pub kind:      EventKind,
    /// Scheduled time of the transition (not the clock value of the step
    /// that happened to fire it).
    pub at:        SimTime,
}

/// Callbacks invoked by [`Timeline`][crate::Timeline] as events fire.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait TimelineObserver {
    /// Called once per fired event, in firing order.
    fn on_event(&mut self, _event: &TimelineEvent) {}

    /// Called once when the last event has fired.
    fn on_completed(&mut self, _at: SimTime) {}
}

/// A [`TimelineObserver`] that does nothing.
pub struct NoopObserver;

impl TimelineObserver for NoopObserver {}

/// Collects every event, in order.
impl TimelineObserver for Vec<TimelineEvent> {
    fn on_event(&mut self, event: &TimelineEvent) {
        self.push(*event);
    }
}
