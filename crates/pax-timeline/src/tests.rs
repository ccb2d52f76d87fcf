//! Unit tests for pax-timeline.

use pax_core::{Passenger, PassengerId, Roster, SeatAssignment, SimTime, TravelPath};

use crate::{
    ControlOutcome, EventKind, NoopObserver, RunState, Timeline, TimelineConfig, TimelineError,
    TimelineEvent, TimelineObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Roster whose passenger `i` walks `distances[i]`.
fn roster_with(distances: &[f64]) -> Roster {
    let mut roster = Roster::new(distances.len());
    for (i, &d) in distances.iter().enumerate() {
        roster
            .assign_seat(
                PassengerId(i as u32),
                SeatAssignment { row: i, seat: 0 },
                TravelPath::empty(),
                d,
            )
            .unwrap();
    }
    roster
}

fn started(distances: &[f64]) -> (Roster, Timeline) {
    let roster = roster_with(distances);
    let mut tl = Timeline::default();
    tl.start(roster.iter()).unwrap();
    (roster, tl)
}

fn ev(id: u32, kind: EventKind, at: f64) -> TimelineEvent {
    TimelineEvent { passenger: PassengerId(id), kind, at: SimTime::from_secs(at) }
}

#[derive(Default)]
struct Recorder {
    events:    Vec<TimelineEvent>,
    completed: Vec<SimTime>,
}

impl TimelineObserver for Recorder {
    fn on_event(&mut self, event: &TimelineEvent) {
        self.events.push(*event);
    }

    fn on_completed(&mut self, at: SimTime) {
        self.completed.push(at);
    }
}

// ── Task construction ─────────────────────────────────────────────────────────

#[cfg(test)]
mod start {
    use super::*;

    #[test]
    fn offsets_stagger_by_one() {
        let (_, tl) = started(&[50.0, 20.0, 75.0, 10.0]);
        let starts: Vec<f64> = tl.tasks().iter().map(|t| t.start.as_secs()).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(tl.state(), RunState::Running);
    }

    #[test]
    fn duration_is_distance_over_speed() {
        let (_, tl) = started(&[50.0, 20.0]);
        assert_eq!(tl.tasks()[0].duration, 5.0);
        assert_eq!(tl.tasks()[1].duration, 2.0);
        assert_eq!(tl.end_time(), SimTime::from_secs(5.0));
    }

    #[test]
    fn follows_the_given_order() {
        let roster = roster_with(&[10.0, 20.0, 30.0]);
        let order: Vec<&Passenger> = [2u32, 0, 1]
            .iter()
            .map(|&i| roster.get(PassengerId(i)).unwrap())
            .collect();
        let mut tl = Timeline::default();
        tl.start(order).unwrap();
        let ids: Vec<PassengerId> = tl.tasks().iter().map(|t| t.passenger).collect();
        assert_eq!(ids, vec![PassengerId(2), PassengerId(0), PassengerId(1)]);
        assert_eq!(tl.task_for(PassengerId(0)).unwrap().start, SimTime::from_secs(1.0));
    }

    #[test]
    fn custom_speed_and_stagger() {
        let roster = roster_with(&[30.0, 30.0]);
        let mut tl = Timeline::new(TimelineConfig { walking_speed: 3.0, stagger: 2.5 }).unwrap();
        tl.start(roster.iter()).unwrap();
        assert_eq!(tl.tasks()[1].start, SimTime::from_secs(2.5));
        assert_eq!(tl.tasks()[1].duration, 10.0);
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(matches!(
            Timeline::new(TimelineConfig { walking_speed: 0.0, stagger: 1.0 }),
            Err(TimelineError::Config(_))
        ));
        assert!(Timeline::new(TimelineConfig { walking_speed: 1.0, stagger: -1.0 }).is_err());
    }

    #[test]
    fn empty_plan_completes_immediately() {
        let roster = Roster::new(0);
        let mut tl = Timeline::default();
        tl.start(roster.iter()).unwrap();
        assert_eq!(tl.state(), RunState::Completed);
    }

    #[test]
    fn start_while_running_restarts_clean() {
        let (roster, mut tl) = started(&[50.0, 50.0]);
        let mut rec = Recorder::default();
        tl.advance(3.0, &mut rec);
        assert!(tl.now() > SimTime::ZERO);

        tl.start(roster.iter()).unwrap();
        assert_eq!(tl.now(), SimTime::ZERO);
        assert_eq!(tl.state(), RunState::Running);
        assert_eq!(tl.pending_events(), 4);
        assert!(tl.tasks().iter().all(|t| !t.is_started()));
    }
}

// ── Event firing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod firing {
    use super::*;

    #[test]
    fn any_observer_sees_the_same_stream() {
        let (_, mut tl) = started(&[10.0, 30.0]);
        assert_eq!(tl.advance(2.0, &mut NoopObserver), 3);

        let mut log: Vec<TimelineEvent> = Vec::new();
        assert_eq!(tl.advance(5.0, &mut log), 1);
        assert_eq!(log, vec![ev(1, EventKind::Complete, 4.0)]);
        assert_eq!(tl.state(), RunState::Completed);
    }

    #[test]
    fn no_event_before_first_advance() {
        let (_, mut tl) = started(&[20.0]);
        assert_eq!(tl.pending_events(), 2);
        let mut rec = Recorder::default();
        assert_eq!(tl.advance(0.0, &mut rec), 1);
        assert_eq!(rec.events, vec![ev(0, EventKind::Start, 0.0)]);
    }

    #[test]
    fn fires_in_time_order() {
        // Task 0: 0 → 5, task 1: 1 → 2, task 2: 2 → 3.
        let (_, mut tl) = started(&[50.0, 10.0, 10.0]);
        let mut rec = Recorder::default();
        tl.advance(10.0, &mut rec);
        assert_eq!(
            rec.events,
            vec![
                ev(0, EventKind::Start, 0.0),
                ev(1, EventKind::Start, 1.0),
                ev(1, EventKind::Complete, 2.0),
                ev(2, EventKind::Start, 2.0),
                ev(2, EventKind::Complete, 3.0),
                ev(0, EventKind::Complete, 5.0),
            ]
        );
        assert_eq!(tl.state(), RunState::Completed);
        assert_eq!(rec.completed.len(), 1);
    }

    #[test]
    fn same_instant_fires_in_task_order() {
        // Task 0 completes at t=1, exactly when task 1 starts.
        let (_, mut tl) = started(&[10.0, 10.0]);
        let mut rec = Recorder::default();
        tl.advance(1.0, &mut rec);
        assert_eq!(
            rec.events,
            vec![
                ev(0, EventKind::Start, 0.0),
                ev(0, EventKind::Complete, 1.0),
                ev(1, EventKind::Start, 1.0),
            ]
        );
    }

    #[test]
    fn zero_length_walk_starts_before_completing() {
        let (_, mut tl) = started(&[0.0]);
        let mut events: Vec<TimelineEvent> = Vec::new();
        tl.advance(0.0, &mut events);
        assert_eq!(events, vec![ev(0, EventKind::Start, 0.0), ev(0, EventKind::Complete, 0.0)]);
    }

    #[test]
    fn small_steps_match_one_big_step() {
        let distances = [75.0, 80.2, 91.3, 60.0, 120.5];
        let (_, mut coarse) = started(&distances);
        let (_, mut fine) = started(&distances);
        let mut a: Vec<TimelineEvent> = Vec::new();
        let mut b: Vec<TimelineEvent> = Vec::new();

        coarse.advance(100.0, &mut a);
        for _ in 0..1000 {
            fine.advance(0.1, &mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn every_start_precedes_its_complete() {
        let (_, mut tl) = started(&[75.0, 3.0, 0.0, 44.0, 12.5, 90.0]);
        let mut events: Vec<TimelineEvent> = Vec::new();
        while tl.state() == RunState::Running {
            tl.advance(0.25, &mut events);
        }
        for id in 0..6 {
            let pos = |kind| {
                events
                    .iter()
                    .position(|e| e.passenger == PassengerId(id) && e.kind == kind)
                    .unwrap()
            };
            assert!(pos(EventKind::Start) < pos(EventKind::Complete), "passenger {id}");
        }
        assert_eq!(events.len(), 12);
    }

    #[test]
    fn progress_follows_the_walk() {
        let (_, mut tl) = started(&[40.0, 40.0]);
        let mut rec = Recorder::default();
        tl.advance(2.0, &mut rec);
        assert_eq!(tl.progress(PassengerId(0)), Some(0.5));
        assert_eq!(tl.progress(PassengerId(1)), Some(0.25));
        assert_eq!(tl.progress(PassengerId(9)), None);
        tl.advance(10.0, &mut rec);
        assert_eq!(tl.progress(PassengerId(1)), Some(1.0));
    }
}

// ── Controls ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controls {
    use super::*;

    #[test]
    fn pause_freezes_clock() {
        let (_, mut tl) = started(&[50.0, 50.0]);
        let mut rec = Recorder::default();
        tl.advance(0.5, &mut rec);
        assert_eq!(tl.pause(), ControlOutcome::Applied);

        assert_eq!(tl.advance(10.0, &mut rec), 0);
        assert_eq!(tl.now(), SimTime::from_secs(0.5));
        assert_eq!(rec.events.len(), 1);

        assert_eq!(tl.resume(), ControlOutcome::Applied);
        tl.advance(0.5, &mut rec);
        assert_eq!(tl.now(), SimTime::from_secs(1.0));
        assert_eq!(rec.events.last(), Some(&ev(1, EventKind::Start, 1.0)));
    }

    #[test]
    fn controls_in_wrong_state_are_ignored() {
        let mut tl = Timeline::default();
        assert_eq!(tl.pause(), ControlOutcome::Ignored);
        assert_eq!(tl.resume(), ControlOutcome::Ignored);
        assert_eq!(tl.seek_to_end(&mut Recorder::default()), ControlOutcome::Ignored);
        assert_eq!(tl.state(), RunState::Idle);

        let (_, mut tl) = started(&[10.0]);
        assert_eq!(tl.resume(), ControlOutcome::Ignored);
        assert_eq!(tl.pause(), ControlOutcome::Applied);
        assert_eq!(tl.pause(), ControlOutcome::Ignored);
        assert_eq!(tl.state(), RunState::Paused);
    }

    #[test]
    fn seek_fires_remaining_in_task_order() {
        let (_, mut tl) = started(&[50.0, 10.0, 30.0]);
        let mut rec = Recorder::default();
        tl.advance(1.5, &mut rec); // fired: S0, S1
        tl.pause();
        rec.events.clear();

        assert_eq!(tl.seek_to_end(&mut rec), ControlOutcome::Applied);
        assert_eq!(
            rec.events,
            vec![
                ev(0, EventKind::Complete, 5.0),
                ev(1, EventKind::Complete, 2.0),
                ev(2, EventKind::Start, 2.0),
                ev(2, EventKind::Complete, 5.0),
            ]
        );
        assert_eq!(tl.state(), RunState::Completed);
        assert_eq!(tl.now(), SimTime::from_secs(5.0));
        assert_eq!(tl.pending_events(), 0);
        assert_eq!(rec.completed.len(), 1);
    }

    #[test]
    fn seek_is_idempotent() {
        let (_, mut tl) = started(&[10.0, 10.0]);
        let mut rec = Recorder::default();
        tl.seek_to_end(&mut rec);
        let fired = rec.events.len();
        assert_eq!(tl.seek_to_end(&mut rec), ControlOutcome::Ignored);
        assert_eq!(rec.events.len(), fired);
        assert_eq!(fired, 4);
    }

    #[test]
    fn reset_discards_everything() {
        let (_, mut tl) = started(&[10.0, 10.0]);
        let mut rec = Recorder::default();
        tl.advance(0.5, &mut rec);

        assert_eq!(tl.reset(), ControlOutcome::Applied);
        assert_eq!(tl.state(), RunState::Idle);
        assert_eq!(tl.now(), SimTime::ZERO);
        assert!(tl.tasks().is_empty());
        assert_eq!(tl.pending_events(), 0);
        assert_eq!(tl.advance(100.0, &mut rec), 0);
        assert_eq!(rec.events.len(), 1);
    }

    #[test]
    fn reset_from_completed_and_idle() {
        let (_, mut tl) = started(&[10.0]);
        tl.seek_to_end(&mut Recorder::default());
        assert_eq!(tl.reset(), ControlOutcome::Applied);
        assert_eq!(tl.reset(), ControlOutcome::Applied);
        assert_eq!(tl.state(), RunState::Idle);
    }
}
