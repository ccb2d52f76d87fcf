//! `Roster` — id-indexed passenger storage.
//!
//! The passenger at position `i` always has `PassengerId(i)`.  Boarding
//! order lives elsewhere (a `Vec<PassengerId>` built by the sequencer), so
//! reordering never moves passengers and ids never go stale.

use crate::{
    BoardingStatus, Passenger, PassengerId, PaxError, PaxResult, SeatAssignment, TravelPath,
};

/// Fixed-length passenger list for one boarding run.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    passengers: Vec<Passenger>,
}

impl Roster {
    /// `count` unassigned, waiting passengers with ids `0..count`.
    pub fn new(count: usize) -> Self {
        let passengers = (0..count as u32)
            .map(|i| Passenger::new(PassengerId(i)))
            .collect();
        Self { passengers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    /// Passengers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.passengers.iter()
    }

    /// Iterator over all `PassengerId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PassengerId> + '_ {
        (0..self.passengers.len() as u32).map(PassengerId)
    }

    /// Index of the first passenger without a seat at or after `from`, or
    /// `None` when every remaining passenger is assigned.
    pub fn next_unassigned(&self, from: usize) -> Option<usize> {
        self.passengers
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, p)| !p.is_assigned())
            .map(|(i, _)| i)
    }

    /// Number of passengers holding a seat.
    pub fn assigned_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_assigned()).count()
    }

    /// Give `id` its seat, travel path, and walk distance.
    ///
    /// A seat is write-once: assigning an already-seated passenger fails and
    /// leaves the roster untouched.
    pub fn assign_seat(
        &mut self,
        id:       PassengerId,
        seat:     SeatAssignment,
        path:     TravelPath,
        distance: f64,
    ) -> PaxResult<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(PaxError::InvalidDistance(distance));
        }
        let passenger = self
            .passengers
            .get_mut(id.index())
            .ok_or(PaxError::PassengerNotFound(id))?;
        if let Some(held) = passenger.seat_assignment() {
            return Err(PaxError::SeatAlreadyAssigned {
                passenger: id,
                row:       held.row,
                seat:      held.seat,
            });
        }
        passenger.assign(seat, path, distance);
        Ok(())
    }

    pub fn set_status(&mut self, id: PassengerId, status: BoardingStatus) -> PaxResult<()> {
        let passenger = self
            .passengers
            .get_mut(id.index())
            .ok_or(PaxError::PassengerNotFound(id))?;
        passenger.set_status(status);
        Ok(())
    }

    /// Put every passenger back to `Waiting`.  Seats are kept.
    pub fn reset_statuses(&mut self) {
        for p in &mut self.passengers {
            p.set_status(BoardingStatus::Waiting);
        }
    }

    /// How many passengers currently have `status`.
    pub fn count_status(&self, status: BoardingStatus) -> usize {
        self.passengers.iter().filter(|p| p.status() == status).count()
    }
}
