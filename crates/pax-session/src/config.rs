//! Session configuration.
//!
//! Typically built in code via [`SessionBuilder`][crate::SessionBuilder] or
//! loaded from a JSON/TOML file by the application (with the `serde`
//! feature) and passed to [`BoardingSession::from_config`][crate::BoardingSession::from_config].

use pax_cabin::CabinLayout;
use pax_seating::{BoardingStrategy, SeatWave, standard_waves, validate_waves};
use pax_timeline::TimelineConfig;

use crate::{SessionError, SessionResult};

const DEFAULT_PASSENGER_COUNT: usize = 125;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Roster size.  Must be at least 1 and fit the seats the waves cover.
    pub passenger_count: usize,

    pub strategy: BoardingStrategy,

    /// RNG seed for the random strategy.  `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Walking speed and start stagger.
    pub timeline: TimelineConfig,

    /// Allocation passes, in order.  Default: window, aisle, middle.
    pub seat_waves: Vec<SeatWave>,

    pub cabin: CabinLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            passenger_count: DEFAULT_PASSENGER_COUNT,
            strategy:        BoardingStrategy::default(),
            seed:            None,
            timeline:        TimelineConfig::default(),
            seat_waves:      standard_waves(),
            cabin:           CabinLayout::default(),
        }
    }
}

impl SessionConfig {
    /// Seats reachable through the configured waves.
    pub fn wave_capacity(&self) -> usize {
        self.seat_waves.iter().map(|w| w.capacity(&self.cabin)).sum()
    }

    /// Check every invariant a session relies on.
    pub fn validate(&self) -> SessionResult<()> {
        if self.passenger_count == 0 {
            return Err(SessionError::InvalidPassengerCount(self.passenger_count));
        }
        self.cabin.validate()?;
        self.timeline.validate()?;
        validate_waves(&self.seat_waves, &self.cabin)?;

        let capacity = self.wave_capacity();
        if self.passenger_count > capacity {
            return Err(SessionError::CapacityExceeded {
                requested: self.passenger_count,
                capacity,
            });
        }
        Ok(())
    }
}
