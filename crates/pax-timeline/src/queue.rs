//! `EventQueue` — pending timeline events in firing order.
//!
//! Keys sort by `(time, task index, kind)`, which is exactly the firing
//! order: earlier events first, same-instant events in boarding order, and
//! a passenger's `Start` before its own `Complete`.  Draining up to the
//! current clock is O(log E) per event.

use std::collections::BTreeMap;

use pax_core::{PassengerId, SimTime};

use crate::EventKind;

/// Sort key of one pending event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventKey {
    pub at:   SimTime,
    pub task: usize,
    pub kind: EventKind,
}

#[derive(Default, Debug)]
pub struct EventQueue {
    inner: BTreeMap<EventKey, PassengerId>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: EventKey, passenger: PassengerId) {
        self.inner.insert(key, passenger);
    }

    /// Remove and return the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: SimTime) -> Option<(EventKey, PassengerId)> {
        let (key, _) = self.inner.first_key_value()?;
        if key.at > now {
            return None;
        }
        self.inner.pop_first()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
