//! Session observer trait — the event subscription surface.

use pax_core::SimTime;
use pax_timeline::TimelineEvent;

use crate::Counters;

/// A passenger state transition as delivered to observers.
pub type BoardingEvent = TimelineEvent;

/// Callbacks invoked by [`BoardingSession`][crate::BoardingSession] after
/// each scheduler-driven mutation.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: animation bridge
///
/// ```rust,ignore
/// struct Animator { sprites: Vec<Sprite> }
///
/// impl SessionObserver for Animator {
///     fn on_event(&mut self, event: &BoardingEvent, _counters: Counters) {
///         if event.kind == EventKind::Start {
///             self.sprites[event.passenger.index()].begin_walk();
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called once per fired event, after the passenger's status and the
    /// counters have been updated.  `counters` includes this event.
    fn on_event(&mut self, _event: &BoardingEvent, _counters: Counters) {}

    /// Called at the end of every clock step that ran, and after a seek.
    fn on_step_end(&mut self, _now: SimTime, _counters: Counters) {}

    /// Called once when the last passenger is seated.
    fn on_boarding_complete(&mut self, _now: SimTime, _counters: Counters) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Records every event in firing order.
#[derive(Debug, Default)]
pub struct EventLog {
    events:   Vec<BoardingEvent>,
    complete: bool,
}

impl EventLog {
    pub fn events(&self) -> &[BoardingEvent] {
        &self.events
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.complete = false;
    }
}

impl SessionObserver for EventLog {
    fn on_event(&mut self, event: &BoardingEvent, _counters: Counters) {
        self.events.push(*event);
    }

    fn on_boarding_complete(&mut self, _now: SimTime, _counters: Counters) {
        self.complete = true;
    }
}
