//! `pax-seating` — seat allocation and boarding order.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`wave`]       | `SeatWave`, standard window/aisle/middle waves, validation |
//! | [`allocator`]  | `allocate` — fill one seat wave across all rows          |
//! | [`strategy`]   | `BoardingStrategy` (front-to-back, back-to-front, random)|
//! | [`sequencer`]  | `sequence` — order an assigned roster for boarding       |
//! | [`error`]      | `SeatingError`, `SeatingResult<T>`                       |
//!
//! # Pipeline (summary)
//!
//! ```text
//! next = allocate(0,    roster, window, cabin)
//! next = allocate(next, roster, aisle,  cabin)
//!        allocate(next, roster, middle, cabin)
//! order = sequence(roster, cabin, strategy, rng)
//! ```

pub mod allocator;
pub mod error;
pub mod sequencer;
pub mod strategy;
pub mod wave;


pub use allocator::allocate;
pub use error::{SeatingError, SeatingResult};
pub use sequencer::{compare_in_row, sequence};
pub use strategy::BoardingStrategy;
pub use wave::{SeatWave, standard_waves, validate_waves};
