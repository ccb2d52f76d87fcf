use pax_core::PassengerId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("{passenger} has invalid travel distance {distance}")]
    InvalidDistance {
        passenger: PassengerId,
        distance:  f64,
    },

    #[error("timeline configuration error: {0}")]
    Config(String),
}

pub type TimelineResult<T> = Result<T, TimelineError>;
