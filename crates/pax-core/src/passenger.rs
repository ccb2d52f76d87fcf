//! Per-passenger state.

use std::fmt;

use crate::{PassengerId, TravelPath};

/// Where a passenger is in the boarding process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardingStatus {
    /// Not yet in the cabin.
    #[default]
    Waiting,
    /// Walking from the door to the seat.
    Boarding,
    /// In the seat.
    Seated,
}

impl BoardingStatus {
    /// Single-letter code used by the seat map (`W`, `B`, `S`).
    pub fn code(self) -> char {
        match self {
            BoardingStatus::Waiting  => 'W',
            BoardingStatus::Boarding => 'B',
            BoardingStatus::Seated   => 'S',
        }
    }
}

impl fmt::Display for BoardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoardingStatus::Waiting  => "waiting",
            BoardingStatus::Boarding => "boarding",
            BoardingStatus::Seated   => "seated",
        };
        f.write_str(s)
    }
}

/// A `(row, seat)` pair, both zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatAssignment {
    pub row:  usize,
    pub seat: usize,
}

/// One passenger in a [`Roster`][crate::Roster].
///
/// Fields are private: the seat is write-once through
/// [`Roster::assign_seat`][crate::Roster::assign_seat] and the status moves
/// only through [`Roster::set_status`][crate::Roster::set_status].
#[derive(Clone, Debug, PartialEq)]
pub struct Passenger {
    id:              PassengerId,
    seat:            Option<SeatAssignment>,
    status:          BoardingStatus,
    travel_path:     TravelPath,
    travel_distance: f64,
}

impl Passenger {
    pub(crate) fn new(id: PassengerId) -> Self {
        Self {
            id,
            seat:            None,
            status:          BoardingStatus::Waiting,
            travel_path:     TravelPath::empty(),
            travel_distance: 0.0,
        }
    }

    #[inline]
    pub fn id(&self) -> PassengerId {
        self.id
    }

    #[inline]
    pub fn seat_assignment(&self) -> Option<SeatAssignment> {
        self.seat
    }

    #[inline]
    pub fn row(&self) -> Option<usize> {
        self.seat.map(|s| s.row)
    }

    #[inline]
    pub fn seat(&self) -> Option<usize> {
        self.seat.map(|s| s.seat)
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.seat.is_some()
    }

    #[inline]
    pub fn status(&self) -> BoardingStatus {
        self.status
    }

    pub fn travel_path(&self) -> &TravelPath {
        &self.travel_path
    }

    /// Walk length from the door to the seat; `0.0` until assigned.
    #[inline]
    pub fn travel_distance(&self) -> f64 {
        self.travel_distance
    }

    pub(crate) fn assign(&mut self, seat: SeatAssignment, path: TravelPath, distance: f64) {
        self.seat = Some(seat);
        self.travel_path = path;
        self.travel_distance = distance;
    }

    pub(crate) fn set_status(&mut self, status: BoardingStatus) {
        self.status = status;
    }
}
