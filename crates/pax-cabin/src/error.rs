use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CabinError {
    /// A lookup outside the configured rows/seats.  Indicates a wiring bug
    /// upstream; correct configuration never produces it.
    #[error("row {row} seat {seat} is outside a {rows}x{seats_per_row} cabin")]
    OutOfRange {
        row:           usize,
        seat:          usize,
        rows:          usize,
        seats_per_row: usize,
    },

    #[error("invalid cabin layout: {0}")]
    InvalidLayout(String),
}

pub type CabinResult<T> = Result<T, CabinError>;
