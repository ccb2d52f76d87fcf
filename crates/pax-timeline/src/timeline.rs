//! The `Timeline` struct and its control surface.

use std::collections::HashMap;
use std::fmt;

use pax_core::{Passenger, PassengerId, SimClock, SimTime};
use tracing::{debug, info};

use crate::{
    EventKey, EventKind, EventQueue, Task, TimelineConfig, TimelineError, TimelineEvent,
    TimelineObserver, TimelineResult,
};

/// Where the timeline is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Idle      => "idle",
            RunState::Running   => "running",
            RunState::Paused    => "paused",
            RunState::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Result of a control operation.
///
/// Controls invoked in the wrong state are not errors: the UI disables
/// those buttons anyway, so they degrade to `Ignored`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    Applied,
    Ignored,
}

impl ControlOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == ControlOutcome::Applied
    }
}

/// Staggered per-passenger tasks on one simulated clock.
///
/// Owned by a single coordinator.  Every mutation takes `&mut self`, so
/// control operations can only run between clock-advance steps.
#[derive(Debug, Default)]
pub struct Timeline {
    config:       TimelineConfig,
    tasks:        Vec<Task>,
    by_passenger: HashMap<PassengerId, usize>,
    pending:      EventQueue,
    clock:        SimClock,
    state:        RunState,
}

impl Timeline {
    pub fn new(config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Tasks in boarding order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_for(&self, passenger: PassengerId) -> Option<&Task> {
        self.by_passenger.get(&passenger).map(|&i| &self.tasks[i])
    }

    /// Walk progress of `passenger` in `[0, 1]`; `None` if not scheduled.
    pub fn progress(&self, passenger: PassengerId) -> Option<f64> {
        self.task_for(passenger).map(|t| t.progress(self.clock.now()))
    }

    /// Number of events still to fire.
    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Time at which the last passenger sits down.
    pub fn end_time(&self) -> SimTime {
        self.tasks.iter().map(Task::end).max().unwrap_or(SimTime::ZERO)
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Build one task per passenger, in the given order, and start running.
    ///
    /// Task `i` starts at `i * stagger` and lasts `distance / walking_speed`.
    /// A timeline that is not `Idle` is reset first.  Distances are checked
    /// before anything changes, so an error leaves the timeline as it was.
    /// No event fires here; the first [`advance`](Self::advance) (an
    /// `advance(0.0)` is fine) fires everything due at time zero.
    pub fn start<'a, I>(&mut self, ordered: I) -> TimelineResult<()>
    where
        I: IntoIterator<Item = &'a Passenger>,
    {
        let mut tasks = Vec::new();
        for (i, p) in ordered.into_iter().enumerate() {
            let distance = p.travel_distance();
            if !distance.is_finite() || distance < 0.0 {
                return Err(TimelineError::InvalidDistance { passenger: p.id(), distance });
            }
            let start = SimTime::from_secs(i as f64 * self.config.stagger);
            tasks.push(Task::new(p.id(), start, distance / self.config.walking_speed));
        }

        if self.state != RunState::Idle {
            debug!(state = %self.state, "restarting timeline");
            self.reset();
        }

        for (i, task) in tasks.iter().enumerate() {
            self.by_passenger.insert(task.passenger, i);
            self.pending.push(EventKey { at: task.start, task: i, kind: EventKind::Start }, task.passenger);
            self.pending.push(EventKey { at: task.end(), task: i, kind: EventKind::Complete }, task.passenger);
        }
        self.tasks = tasks;
        self.state = if self.tasks.is_empty() { RunState::Completed } else { RunState::Running };

        info!(tasks = self.tasks.len(), end = %self.end_time(), "timeline started");
        Ok(())
    }

    /// Move the clock forward by `dt` seconds and fire every event now due.
    ///
    /// Does nothing unless `Running`.  Returns the number of events fired.
    pub fn advance<O: TimelineObserver>(&mut self, dt: f64, observer: &mut O) -> usize {
        if self.state != RunState::Running {
            return 0;
        }
        self.clock.advance(dt);
        let now = self.clock.now();

        let mut fired = 0;
        while let Some((key, passenger)) = self.pending.pop_due(now) {
            self.fire(key.task, passenger, key.kind, key.at, observer);
            fired += 1;
        }
        if self.pending.is_empty() {
            self.finish(observer);
        }
        fired
    }

    /// Freeze the clock.  `Running` only.
    pub fn pause(&mut self) -> ControlOutcome {
        if self.state != RunState::Running {
            debug!(state = %self.state, "pause ignored");
            return ControlOutcome::Ignored;
        }
        self.state = RunState::Paused;
        debug!(now = %self.clock.now(), "timeline paused");
        ControlOutcome::Applied
    }

    /// Unfreeze the clock from where it stopped.  `Paused` only.
    pub fn resume(&mut self) -> ControlOutcome {
        if self.state != RunState::Paused {
            debug!(state = %self.state, "resume ignored");
            return ControlOutcome::Ignored;
        }
        self.state = RunState::Running;
        debug!(now = %self.clock.now(), "timeline resumed");
        ControlOutcome::Applied
    }

    /// Fire every outstanding event in task order and complete.
    ///
    /// Each task fires its `Start` (if not yet fired) and then its
    /// `Complete`, stamped with their scheduled times.  Only valid from
    /// `Running` or `Paused`; once `Completed` further calls are ignored.
    pub fn seek_to_end<O: TimelineObserver>(&mut self, observer: &mut O) -> ControlOutcome {
        if !matches!(self.state, RunState::Running | RunState::Paused) {
            debug!(state = %self.state, "seek to end ignored");
            return ControlOutcome::Ignored;
        }

        self.pending.clear();
        for i in 0..self.tasks.len() {
            let task = &self.tasks[i];
            let (passenger, start, end) = (task.passenger, task.start, task.end());
            if !task.started {
                self.fire(i, passenger, EventKind::Start, start, observer);
            }
            if !self.tasks[i].completed {
                self.fire(i, passenger, EventKind::Complete, end, observer);
            }
        }
        self.clock.jump_to(self.end_time());
        self.finish(observer);
        ControlOutcome::Applied
    }

    /// Drop all tasks and return to `Idle` at time zero.  Valid from any
    /// state; pending events are discarded without firing.
    pub fn reset(&mut self) -> ControlOutcome {
        self.tasks.clear();
        self.by_passenger.clear();
        self.pending.clear();
        self.clock.rewind();
        self.state = RunState::Idle;
        ControlOutcome::Applied
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn fire<O: TimelineObserver>(
        &mut self,
        task:      usize,
        passenger: PassengerId,
        kind:      EventKind,
        at:        SimTime,
        observer:  &mut O,
    ) {
        let t = &mut self.tasks[task];
        match kind {
            EventKind::Start    => t.started = true,
            EventKind::Complete => t.completed = true,
        }
        observer.on_event(&TimelineEvent { passenger, kind, at });
    }

    fn finish<O: TimelineObserver>(&mut self, observer: &mut O) {
        self.state = RunState::Completed;
        info!(now = %self.clock.now(), tasks = self.tasks.len(), "timeline completed");
        observer.on_completed(self.clock.now());
    }
}
