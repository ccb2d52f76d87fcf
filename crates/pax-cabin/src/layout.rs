//! The `CabinLayout` lookup table.
//!
//! The default table describes a 30-row, 6-abreast single-aisle cabin drawn
//! in the rendering layer's coordinate space.  Row offsets are measured seat
//! tracks, not a uniform pitch; any non-decreasing table for another cabin
//! works the same way.

use pax_core::{CabinPoint, TravelPath};

use crate::{CabinError, CabinResult};

// ── Default single-aisle table ────────────────────────────────────────────────

const DEFAULT_ROW_OFFSETS: [f64; 30] = [
    100.3, 112.6, 125.0, 137.5, 149.5, 161.8, 173.7, 185.8, 198.1, 210.1,
    224.0, 237.4, 248.8, 259.0, 269.6, 280.9, 291.8, 302.6, 313.5, 324.2,
    335.2, 346.2, 356.9, 368.1, 378.6, 389.6, 400.5, 411.4, 422.6, 432.9,
];
const DEFAULT_SEATS_PER_ROW: usize = 6;
const DEFAULT_SEAT_PITCH:    f64   = 6.2;
const DEFAULT_NEAR_BASE_X:   f64   = 251.1;
const DEFAULT_FAR_BASE_X:    f64   = 297.2;
const DEFAULT_SEAT_WIDTH:    f64   = 7.2;

/// Length of the fixed door-to-aisle walk that precedes every path.
const DEFAULT_DOOR_OFFSET: f64 = 30.72;

/// Door → galley → aisle head.  The last vertex is where passengers turn
/// down the aisle.
const DEFAULT_ENTRY: [CabinPoint; 4] = [
    CabinPoint::new(244.0, 78.0),
    CabinPoint::new(258.0, 78.0),
    CabinPoint::new(268.0, 79.1),
    CabinPoint::new(274.0, 82.0),
];

/// Narrower seat track in the last two rows (row n-2, then row n-1).
const DEFAULT_EXIT_CORRECTIONS: [SideCorrection; 2] = [
    SideCorrection { near: 1.0, far: -0.7 },
    SideCorrection { near: 1.8, far: -1.5 },
];

// ── SeatSide ─────────────────────────────────────────────────────────────────

/// Which half of the row a seat is in.
///
/// Seat indices below `seats_per_row / 2` are on the near side; the rest are
/// on the far side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatSide {
    Near,
    Far,
}

/// Horizontal nudge applied to one row's seats, per side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideCorrection {
    pub near: f64,
    pub far:  f64,
}

// ── CabinLayout ──────────────────────────────────────────────────────────────

/// Static cabin geometry: rows, seats, positions, and walk paths.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabinLayout {
    /// Top of each row's seat track.  Non-decreasing; length = row count.
    row_offsets:      Vec<f64>,
    seats_per_row:    usize,
    seat_pitch:       f64,
    near_base_x:      f64,
    far_base_x:       f64,
    seat_width:       f64,
    /// Applied to the last `exit_corrections.len()` rows, in order.
    exit_corrections: Vec<SideCorrection>,
    entry:            Vec<CabinPoint>,
    door_offset:      f64,
}

impl Default for CabinLayout {
    fn default() -> Self {
        Self::single_aisle()
    }
}

impl CabinLayout {
    /// The built-in 30-row, 6-abreast cabin.
    pub fn single_aisle() -> Self {
        Self {
            row_offsets:      DEFAULT_ROW_OFFSETS.to_vec(),
            seats_per_row:    DEFAULT_SEATS_PER_ROW,
            seat_pitch:       DEFAULT_SEAT_PITCH,
            near_base_x:      DEFAULT_NEAR_BASE_X,
            far_base_x:       DEFAULT_FAR_BASE_X,
            seat_width:       DEFAULT_SEAT_WIDTH,
            exit_corrections: DEFAULT_EXIT_CORRECTIONS.to_vec(),
            entry:            DEFAULT_ENTRY.to_vec(),
            door_offset:      DEFAULT_DOOR_OFFSET,
        }
    }

    /// A cabin with custom rows and width, reusing the default seat spacing,
    /// entry path, and exit-row corrections.
    ///
    /// Fails with [`CabinError::InvalidLayout`] unless there is at least one
    /// row, offsets are finite and non-decreasing, and there are at least two
    /// seats per row.
    pub fn new(row_offsets: Vec<f64>, seats_per_row: usize) -> CabinResult<Self> {
        let layout = Self {
            row_offsets,
            seats_per_row,
            ..Self::single_aisle()
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Replace the exit-row corrections.  An empty list disables them.
    pub fn with_exit_corrections(mut self, corrections: Vec<SideCorrection>) -> CabinResult<Self> {
        self.exit_corrections = corrections;
        self.validate()?;
        Ok(self)
    }

    /// Check the layout invariants.  Layouts deserialized from config should
    /// be run through this before use.
    pub fn validate(&self) -> CabinResult<()> {
        if self.row_offsets.is_empty() {
            return Err(CabinError::InvalidLayout("at least one row is required".into()));
        }
        if self.seats_per_row < 2 {
            return Err(CabinError::InvalidLayout(format!(
                "need at least 2 seats per row, got {}",
                self.seats_per_row
            )));
        }
        if self.row_offsets.iter().any(|y| !y.is_finite()) {
            return Err(CabinError::InvalidLayout("row offsets must be finite".into()));
        }
        if let Some(i) = self.row_offsets.windows(2).position(|w| w[1] < w[0]) {
            return Err(CabinError::InvalidLayout(format!(
                "row offsets must be non-decreasing (row {} < row {})",
                i + 1,
                i
            )));
        }
        if self.exit_corrections.len() > self.row_offsets.len() {
            return Err(CabinError::InvalidLayout(format!(
                "{} exit-row corrections for {} rows",
                self.exit_corrections.len(),
                self.row_offsets.len()
            )));
        }
        if self.entry.is_empty() {
            return Err(CabinError::InvalidLayout("entry path must have a vertex".into()));
        }
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_offsets.len()
    }

    #[inline]
    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Total seats in the cabin.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.row_count() * self.seats_per_row
    }

    /// First far-side seat index.
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.seats_per_row / 2
    }

    #[inline]
    pub fn side(&self, seat: usize) -> SeatSide {
        if seat < self.midpoint() { SeatSide::Near } else { SeatSide::Far }
    }

    pub fn row_offsets(&self) -> &[f64] {
        &self.row_offsets
    }

    /// Where passengers turn from the entry into the aisle.
    pub fn aisle_point(&self) -> CabinPoint {
        // validate() guarantees at least one entry vertex.
        self.entry.last().copied().unwrap_or_default()
    }

    /// `Ok(())` when `(row, seat)` exists in this cabin.
    pub fn check(&self, row: usize, seat: usize) -> CabinResult<()> {
        if row < self.row_count() && seat < self.seats_per_row {
            Ok(())
        } else {
            Err(CabinError::OutOfRange {
                row,
                seat,
                rows:          self.row_count(),
                seats_per_row: self.seats_per_row,
            })
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Centre of seat `(row, seat)`.
    pub fn position_for(&self, row: usize, seat: usize) -> CabinResult<CabinPoint> {
        self.check(row, seat)?;

        let y = self.row_offsets[row] + self.seat_pitch / 2.0;
        let side = self.side(seat);
        let mut x = match side {
            SeatSide::Near => self.near_base_x + seat as f64 * self.seat_width,
            SeatSide::Far  => {
                self.far_base_x - (self.seats_per_row - 1 - seat) as f64 * self.seat_width
            }
        };
        if let Some(c) = self.exit_correction(row) {
            x += match side {
                SeatSide::Near => c.near,
                SeatSide::Far  => c.far,
            };
        }
        Ok(CabinPoint::new(x, y))
    }

    /// Entry → aisle head → down the aisle → across to the seat.
    pub fn travel_path(&self, row: usize, seat: usize) -> CabinResult<TravelPath> {
        let end = self.position_for(row, seat)?;
        let aisle = self.aisle_point();

        let mut points = self.entry.clone();
        points.push(CabinPoint::new(aisle.x, end.y));
        points.push(end);
        Ok(TravelPath::new(points))
    }

    /// Scalar walk length from the door to `(row, seat)`.
    ///
    /// Grows with both row depth and distance from the aisle, so seats
    /// further from the door always produce longer walks.
    pub fn travel_distance(&self, row: usize, seat: usize) -> CabinResult<f64> {
        let end = self.position_for(row, seat)?;
        let aisle = self.aisle_point();
        Ok(self.door_offset + (end.y - aisle.y).abs() + (aisle.x - end.x).abs())
    }

    fn exit_correction(&self, row: usize) -> Option<SideCorrection> {
        let first = self.row_count() - self.exit_corrections.len();
        row.checked_sub(first).map(|i| self.exit_corrections[i])
    }
}
