//! Point-in-time, read-only views of a session.

use std::fmt;

use pax_core::{BoardingStatus, PassengerId, SimTime};
use pax_seating::BoardingStrategy;
use pax_timeline::RunState;

/// One passenger as seen by the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassengerView {
    pub id:     PassengerId,
    pub row:    Option<usize>,
    pub seat:   Option<usize>,
    pub status: BoardingStatus,
}

/// Copy of a session's observable state.  Safe to keep after the session
/// moves on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub passengers:    Vec<PassengerView>,
    pub boarded:       usize,
    pub seated:        usize,
    pub total:         usize,
    pub run_state:     RunState,
    pub clock:         SimTime,
    pub strategy:      BoardingStrategy,
    pub row_count:     usize,
    pub seats_per_row: usize,
}

impl Snapshot {
    /// Passengers currently in `status`.
    pub fn count_status(&self, status: BoardingStatus) -> usize {
        self.passengers.iter().filter(|p| p.status == status).count()
    }

    /// Row-by-row text rendering of who sits where.
    pub fn seat_map(&self) -> SeatMap<'_> {
        SeatMap { snapshot: self }
    }
}

/// `Display` adapter returned by [`Snapshot::seat_map`].
///
/// One line per row, one column per seat: `W`/`B`/`S` for the status of the
/// passenger assigned there, `-` for an empty seat.
///
/// ```text
/// Row-0: S S S S S S
/// Row-1: S B - - W S
/// ```
pub struct SeatMap<'a> {
    snapshot: &'a Snapshot,
}

impl fmt::Display for SeatMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;
        let mut grid = vec![None; s.row_count * s.seats_per_row];
        for p in &s.passengers {
            if let (Some(row), Some(seat)) = (p.row, p.seat) {
                if row < s.row_count && seat < s.seats_per_row {
                    grid[row * s.seats_per_row + seat] = Some(p.status);
                }
            }
        }

        for row in 0..s.row_count {
            write!(f, "Row-{row}:")?;
            for seat in 0..s.seats_per_row {
                let c = grid[row * s.seats_per_row + seat].map_or('-', BoardingStatus::code);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
