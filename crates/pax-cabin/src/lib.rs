//! `pax-cabin` — static cabin geometry for the paxboard boarding simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`layout`]  | `CabinLayout`, `SeatSide`, `SideCorrection`                |
//! | [`error`]   | `CabinError`, `CabinResult<T>`                             |
//!
//! # Geometry (summary)
//!
//! ```text
//! y(row)        = row_offsets[row] + seat_pitch / 2
//! x(near seat)  = near_base_x + seat * seat_width
//! x(far seat)   = far_base_x  - (seats_per_row - 1 - seat) * seat_width
//! x            += exit-row correction for the last rows
//! distance      = door_offset + |y - aisle.y| + |aisle.x - x|
//! ```
//!
//! Everything here is a pure lookup; a `CabinLayout` never changes after
//! construction.

pub mod error;
pub mod layout;

#[cfg(test)]
mod tests;

pub use error::{CabinError, CabinResult};
pub use layout::{CabinLayout, SeatSide, SideCorrection};
