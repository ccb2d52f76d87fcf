//! Seat waves: the classes of seat filled together in one allocator pass.

use std::collections::HashSet;

use pax_cabin::CabinLayout;

use crate::{SeatingError, SeatingResult};

/// An ordered set of seat indices processed across every row in one
/// [`allocate`][crate::allocate] call (e.g. both window seats).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatWave {
    pub label: String,
    pub seats: Vec<usize>,
}

impl SeatWave {
    pub fn new(label: impl Into<String>, seats: Vec<usize>) -> Self {
        Self { label: label.into(), seats }
    }

    pub fn window() -> Self {
        Self::new("window", vec![0, 5])
    }

    pub fn aisle() -> Self {
        Self::new("aisle", vec![2, 3])
    }

    pub fn middle() -> Self {
        Self::new("middle", vec![1, 4])
    }

    /// Seats this wave fills in one row.
    #[inline]
    pub fn width(&self) -> usize {
        self.seats.len()
    }

    /// Most passengers one pass can seat in `cabin`.
    #[inline]
    pub fn capacity(&self, cabin: &CabinLayout) -> usize {
        cabin.row_count() * self.width()
    }

    /// Every seat index must exist in `cabin`'s rows.
    pub fn validate(&self, cabin: &CabinLayout) -> SeatingResult<()> {
        match self.seats.iter().find(|&&s| s >= cabin.seats_per_row()) {
            Some(&seat) => Err(SeatingError::InvalidSeatWave {
                wave:          self.label.clone(),
                seat,
                seats_per_row: cabin.seats_per_row(),
            }),
            None => Ok(()),
        }
    }
}

/// Window, then aisle, then middle, for a 6-abreast cabin.
pub fn standard_waves() -> Vec<SeatWave> {
    vec![SeatWave::window(), SeatWave::aisle(), SeatWave::middle()]
}

/// Check a full wave set against `cabin`: every index in range and no seat
/// named twice, within or across waves.
pub fn validate_waves(waves: &[SeatWave], cabin: &CabinLayout) -> SeatingResult<()> {
    let mut seen = HashSet::new();
    for wave in waves {
        wave.validate(cabin)?;
        for &seat in &wave.seats {
            if !seen.insert(seat) {
                return Err(SeatingError::DuplicateSeat { wave: wave.label.clone(), seat });
            }
        }
    }
    Ok(())
}
