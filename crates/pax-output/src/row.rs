//! Plain data rows written by output backends.

use pax_core::SimTime;
use pax_session::{BoardingEvent, Counters, EventKind};

/// One fired passenger event with the counters right after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub passenger: u32,
    pub kind:      EventKind,
    pub time_secs: f64,
    pub boarded:   usize,
    pub seated:    usize,
}

impl EventRow {
    pub fn new(event: &BoardingEvent, counters: Counters) -> Self {
        Self {
            passenger: event.passenger.0,
            kind:      event.kind,
            time_secs: event.at.as_secs(),
            boarded:   counters.boarded,
            seated:    counters.seated,
        }
    }

    /// Column value for `kind`.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            EventKind::Start    => "start",
            EventKind::Complete => "complete",
        }
    }
}

/// Counters at the end of one clock step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:      u64,
    pub time_secs: f64,
    /// Events fired during this step.
    pub events:    usize,
    pub boarded:   usize,
    pub seated:    usize,
}

impl StepSummaryRow {
    pub fn new(step: u64, now: SimTime, events: usize, counters: Counters) -> Self {
        Self {
            step,
            time_secs: now.as_secs(),
            events,
            boarded: counters.boarded,
            seated: counters.seated,
        }
    }
}
