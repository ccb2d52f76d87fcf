//! Boarding order.
//!
//! # Ordering rules
//!
//! Row-based strategies sort by row (ascending for front-to-back,
//! descending for back-to-front) and break ties within a row with the side
//! rule: near-side seats board before far-side seats, the near side from
//! its highest seat index down, the far side from its lowest index up.
//! Both sorts are stable, so equal keys keep roster order.

use std::cmp::Ordering;

use pax_cabin::{CabinLayout, SeatSide};
use pax_core::{Passenger, PassengerId, Roster, SessionRng};
use tracing::warn;

use crate::BoardingStrategy;

/// Order `roster` for boarding under `strategy`.
///
/// Returns every passenger id exactly once.  Row-based strategies expect a
/// fully allocated roster; any unassigned passengers are placed after the
/// assigned ones, in roster order.
pub fn sequence(
    roster:   &Roster,
    cabin:    &CabinLayout,
    strategy: BoardingStrategy,
    rng:      &mut SessionRng,
) -> Vec<PassengerId> {
    if strategy == BoardingStrategy::Random {
        let mut ids: Vec<PassengerId> = roster.ids().collect();
        rng.shuffle(&mut ids);
        return ids;
    }

    let (mut assigned, unassigned): (Vec<&Passenger>, Vec<&Passenger>) =
        roster.iter().partition(|p| p.is_assigned());
    if !unassigned.is_empty() {
        warn!(count = unassigned.len(), %strategy, "sequencing passengers without seats");
    }

    assigned.sort_by(|a, b| {
        let (ra, rb) = (a.row().unwrap_or(0), b.row().unwrap_or(0));
        let by_row = match strategy {
            BoardingStrategy::BackToFront => rb.cmp(&ra),
            _                             => ra.cmp(&rb),
        };
        by_row.then_with(|| {
            compare_in_row(a.seat().unwrap_or(0), b.seat().unwrap_or(0), cabin)
        })
    });

    assigned
        .into_iter()
        .chain(unassigned)
        .map(Passenger::id)
        .collect()
}

/// Side rule for two seats in the same row.
pub fn compare_in_row(seat_a: usize, seat_b: usize, cabin: &CabinLayout) -> Ordering {
    match (cabin.side(seat_a), cabin.side(seat_b)) {
        (SeatSide::Near, SeatSide::Near) => seat_b.cmp(&seat_a),
        (SeatSide::Far, SeatSide::Far)   => seat_a.cmp(&seat_b),
        (side_a, side_b)                 => side_a.cmp(&side_b),
    }
}
