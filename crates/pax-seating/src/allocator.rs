//! Seat allocation over one seat wave.

use pax_cabin::CabinLayout;
use pax_core::{PassengerId, Roster, SeatAssignment};
use tracing::debug;

use crate::{SeatWave, SeatingResult};

/// Seat passengers from `start` onwards into `wave`, row by row from the
/// front.
///
/// For each row `0..row_count`, each seat of the wave (in wave order) goes
/// to the next unassigned passenger at or after the cursor, together with
/// the travel path and distance from `cabin`.  Returns the index to pass as
/// `start` to the next wave:
///
/// - `roster.len()` once the roster is exhausted (including when `start`
///   is already past the end, which is a no-op);
/// - otherwise the index after the last passenger seated.
///
/// One call seats at most `cabin.row_count() * wave.width()` passengers.
/// The wave is validated before anything is written, so a failed call
/// leaves the roster untouched.
pub fn allocate(
    start:  usize,
    roster: &mut Roster,
    wave:   &SeatWave,
    cabin:  &CabinLayout,
) -> SeatingResult<usize> {
    wave.validate(cabin)?;
    if start >= roster.len() {
        return Ok(roster.len());
    }

    let mut cursor = start;
    let mut assigned = 0usize;

    'rows: for row in 0..cabin.row_count() {
        for &seat in &wave.seats {
            let Some(idx) = roster.next_unassigned(cursor) else {
                cursor = roster.len();
                break 'rows;
            };
            let path = cabin.travel_path(row, seat)?;
            let distance = cabin.travel_distance(row, seat)?;
            roster.assign_seat(
                PassengerId(idx as u32),
                SeatAssignment { row, seat },
                path,
                distance,
            )?;
            assigned += 1;
            cursor = idx + 1;
        }
    }

    debug!(wave = %wave.label, assigned, next = cursor, "seat wave allocated");
    Ok(cursor)
}
