use pax_cabin::CabinError;
use pax_core::PaxError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SeatingError {
    #[error("seat wave `{wave}` names seat {seat}, but rows have {seats_per_row} seats")]
    InvalidSeatWave {
        wave:          String,
        seat:          usize,
        seats_per_row: usize,
    },

    #[error("seat {seat} appears in more than one seat wave (`{wave}`)")]
    DuplicateSeat { wave: String, seat: usize },

    #[error("unknown boarding strategy `{0}`")]
    UnknownStrategy(String),

    #[error("cabin lookup failed: {0}")]
    Cabin(#[from] CabinError),

    #[error("roster update failed: {0}")]
    Roster(#[from] PaxError),
}

pub type SeatingResult<T> = Result<T, SeatingError>;
