//! Roster error type.
//!
//! Sub-crates define their own error enums and wrap `PaxError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::PassengerId;

/// Contract violations when mutating a [`Roster`][crate::Roster].
#[derive(Debug, Error, PartialEq)]
pub enum PaxError {
    #[error("{0} not found in roster")]
    PassengerNotFound(PassengerId),

    #[error("{passenger} already holds row {row} seat {seat}")]
    SeatAlreadyAssigned {
        passenger: PassengerId,
        row:       usize,
        seat:      usize,
    },

    #[error("travel distance {0} is negative or not finite")]
    InvalidDistance(f64),
}

/// Shorthand result type for roster operations.
pub type PaxResult<T> = Result<T, PaxError>;
