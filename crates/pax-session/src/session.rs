//! The `BoardingSession` struct and its control surface.

use pax_cabin::CabinLayout;
use pax_core::{BoardingStatus, CabinPoint, Passenger, PassengerId, Roster, SessionRng, SimTime};
use pax_seating::{BoardingStrategy, allocate, sequence};
use pax_timeline::{
    ControlOutcome, EventKind, RunState, Timeline, TimelineEvent, TimelineObserver,
};
use tracing::{debug, info, warn};

use crate::{
    Counters, PassengerView, SessionBuilder, SessionConfig, SessionObserver, SessionResult,
    Snapshot,
};

// ── Event application ─────────────────────────────────────────────────────────

/// Bridges timeline events into roster and counter updates, then forwards
/// them to the session observer.  Borrows the session's fields separately
/// so the timeline can be driven while the roster is mutated.
struct Applier<'a, O: SessionObserver> {
    roster:   &'a mut Roster,
    counters: &'a mut Counters,
    observer: &'a mut O,
}

impl<O: SessionObserver> TimelineObserver for Applier<'_, O> {
    fn on_event(&mut self, event: &TimelineEvent) {
        let status = match event.kind {
            EventKind::Start    => BoardingStatus::Boarding,
            EventKind::Complete => BoardingStatus::Seated,
        };
        if let Err(e) = self.roster.set_status(event.passenger, status) {
            // Tasks are built from this roster, so this means the two are
            // out of sync; leave the counters alone to keep them consistent.
            warn!(error = %e, "dropping event for unknown passenger");
            return;
        }
        match event.kind {
            EventKind::Start    => self.counters.boarded += 1,
            EventKind::Complete => self.counters.seated += 1,
        }
        self.observer.on_event(event, *self.counters);
    }

    fn on_completed(&mut self, at: SimTime) {
        self.observer.on_boarding_complete(at, *self.counters);
    }
}

// ── BoardingSession ───────────────────────────────────────────────────────────

/// Owns one boarding scenario: configuration, roster, timeline, counters.
///
/// Create via [`BoardingSession::configure`] or [`SessionBuilder`].  A
/// session is single-owner: every control takes `&mut self`, which is the
/// serialization the timeline relies on.
pub struct BoardingSession {
    config:   SessionConfig,
    roster:   Roster,
    timeline: Timeline,
    counters: Counters,
    rng:      SessionRng,
    /// Boarding order of the current run; empty while idle.
    order:    Vec<PassengerId>,
}

impl BoardingSession {
    /// A session for `passenger_count` passengers with default cabin, waves,
    /// and timing.
    pub fn configure(passenger_count: usize, strategy: BoardingStrategy) -> SessionResult<Self> {
        SessionBuilder::new(passenger_count, strategy).build()
    }

    /// Validate `config` and return an idle session with an unassigned
    /// roster.
    pub fn from_config(config: SessionConfig) -> SessionResult<Self> {
        config.validate()?;
        let timeline = Timeline::new(config.timeline)?;
        debug!(
            passengers = config.passenger_count,
            strategy = %config.strategy,
            "boarding session configured"
        );
        Ok(Self {
            roster: Roster::new(config.passenger_count),
            rng: SessionRng::from_seed_option(config.seed),
            timeline,
            counters: Counters::default(),
            order: Vec::new(),
            config,
        })
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Seat a fresh roster, order it, and start the timeline.
    ///
    /// Any run in progress is discarded first.  If any step fails the
    /// session keeps its previous roster, timeline, and counters.
    pub fn start_boarding(&mut self) -> SessionResult<()> {
        let cabin = &self.config.cabin;
        let mut roster = Roster::new(self.config.passenger_count);
        let mut next = 0;
        for wave in &self.config.seat_waves {
            next = allocate(next, &mut roster, wave, cabin)?;
        }

        let order = sequence(&roster, cabin, self.config.strategy, &mut self.rng);
        self.timeline.start(order.iter().filter_map(|&id| roster.get(id)))?;

        self.roster = roster;
        self.order = order;
        self.counters = Counters::default();
        info!(
            passengers = self.roster.len(),
            strategy = %self.config.strategy,
            end = %self.timeline.end_time(),
            "boarding started"
        );
        Ok(())
    }

    /// Freeze boarding.  Ignored unless running.
    pub fn pause_boarding(&mut self) -> ControlOutcome {
        self.timeline.pause()
    }

    /// Continue a paused run.  Ignored unless paused.
    pub fn resume_boarding(&mut self) -> ControlOutcome {
        self.timeline.resume()
    }

    /// Stop the run, put everyone back to waiting, and zero the counters.
    ///
    /// Seat assignments are kept so the cabin can still be drawn.
    pub fn reset_boarding(&mut self) -> ControlOutcome {
        self.timeline.reset();
        self.roster.reset_statuses();
        self.counters = Counters::default();
        self.order.clear();
        debug!("boarding reset");
        ControlOutcome::Applied
    }

    /// Skip to the end: every outstanding start/complete fires in boarding
    /// order.  Ignored unless running or paused.
    pub fn complete_boarding_now<O: SessionObserver>(&mut self, observer: &mut O) -> ControlOutcome {
        let mut applier = Applier {
            roster:   &mut self.roster,
            counters: &mut self.counters,
            observer: &mut *observer,
        };
        let outcome = self.timeline.seek_to_end(&mut applier);
        if outcome.is_applied() {
            observer.on_step_end(self.timeline.now(), self.counters);
        }
        outcome
    }

    /// Advance the simulated clock by `dt` seconds and apply every event
    /// that became due.  Returns the number of events applied.
    ///
    /// Does nothing unless running; the host calls this from its frame or
    /// fixed-step loop.
    pub fn advance<O: SessionObserver>(&mut self, dt: f64, observer: &mut O) -> usize {
        if self.timeline.state() != RunState::Running {
            return 0;
        }
        let mut applier = Applier {
            roster:   &mut self.roster,
            counters: &mut self.counters,
            observer: &mut *observer,
        };
        let fired = self.timeline.advance(dt, &mut applier);
        observer.on_step_end(self.timeline.now(), self.counters);
        fired
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            passengers: self
                .roster
                .iter()
                .map(|p| PassengerView {
                    id:     p.id(),
                    row:    p.row(),
                    seat:   p.seat(),
                    status: p.status(),
                })
                .collect(),
            boarded:       self.counters.boarded,
            seated:        self.counters.seated,
            total:         self.roster.len(),
            run_state:     self.timeline.state(),
            clock:         self.timeline.now(),
            strategy:      self.config.strategy,
            row_count:     self.config.cabin.row_count(),
            seats_per_row: self.config.cabin.seats_per_row(),
        }
    }

    /// Where `id` is drawn right now: at the door while waiting, along the
    /// travel path while boarding, in the seat once seated.
    pub fn passenger_position(&self, id: PassengerId) -> Option<CabinPoint> {
        let p = self.roster.get(id)?;
        let path = p.travel_path();
        match p.status() {
            BoardingStatus::Waiting  => path.start(),
            BoardingStatus::Seated   => path.end(),
            BoardingStatus::Boarding => path.point_at(self.timeline.progress(id)?),
        }
    }

    #[inline]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    #[inline]
    pub fn run_state(&self) -> RunState {
        self.timeline.state()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.timeline.state() == RunState::Completed
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.timeline.now()
    }

    #[inline]
    pub fn strategy(&self) -> BoardingStrategy {
        self.config.strategy
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.roster.get(id)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Passenger ids in the order they board this run.
    pub fn boarding_order(&self) -> &[PassengerId] {
        &self.order
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn cabin(&self) -> &CabinLayout {
        &self.config.cabin
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
