//! Fluent builder for constructing a [`BoardingSession`].

use pax_cabin::CabinLayout;
use pax_seating::{BoardingStrategy, SeatWave};
use pax_timeline::TimelineConfig;

use crate::{BoardingSession, SessionConfig, SessionResult};

/// Fluent builder for [`BoardingSession`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                              |
/// |---------------------|--------------------------------------|
/// | `.seed(s)`          | OS entropy                           |
/// | `.cabin(c)`         | `CabinLayout::single_aisle()`        |
/// | `.seat_waves(v)`    | window, aisle, middle                |
/// | `.timeline(t)`      | speed 10, stagger 1                  |
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new(4, BoardingStrategy::FrontToBack)
///     .seed(42)
///     .seat_waves(vec![SeatWave::new("window", vec![0, 5])])
///     .build()?;
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    pub fn new(passenger_count: usize, strategy: BoardingStrategy) -> Self {
        Self {
            config: SessionConfig {
                passenger_count,
                strategy,
                ..SessionConfig::default()
            },
        }
    }

    /// Fix the RNG seed so random orders are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn cabin(mut self, cabin: CabinLayout) -> Self {
        self.config.cabin = cabin;
        self
    }

    pub fn seat_waves(mut self, waves: Vec<SeatWave>) -> Self {
        self.config.seat_waves = waves;
        self
    }

    pub fn timeline(mut self, timeline: TimelineConfig) -> Self {
        self.config.timeline = timeline;
        self
    }

    /// Validate the configuration and return an idle session.
    pub fn build(self) -> SessionResult<BoardingSession> {
        BoardingSession::from_config(self.config)
    }
}
