use pax_cabin::CabinError;
use pax_seating::SeatingError;
use pax_timeline::TimelineError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("passenger count must be at least 1, got {0}")]
    InvalidPassengerCount(usize),

    #[error("{requested} passengers do not fit the {capacity} seats covered by the seat waves")]
    CapacityExceeded {
        requested: usize,
        capacity:  usize,
    },

    #[error("cabin error: {0}")]
    Cabin(#[from] CabinError),

    #[error("seating error: {0}")]
    Seating(#[from] SeatingError),

    #[error("timeline error: {0}")]
    Timeline(#[from] TimelineError),
}

pub type SessionResult<T> = Result<T, SessionError>;
