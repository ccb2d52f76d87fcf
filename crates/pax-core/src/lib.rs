//! `pax-core` — foundational types for the `paxboard` boarding simulator.
//!
//! This crate is a dependency of every other `pax-*` crate.  It has no
//! `pax-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`                                         |
//! | [`geo`]         | `CabinPoint`, `TravelPath` polyline                   |
//! | [`time`]        | `SimTime`, `SimClock`                                 |
//! | [`rng`]         | `SessionRng`                                          |
//! | [`passenger`]   | `Passenger`, `BoardingStatus`, `SeatAssignment`       |
//! | [`roster`]      | `Roster` (id-indexed passenger storage)               |
//! | [`error`]       | `PaxError`, `PaxResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod roster;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PaxError, PaxResult};
pub use geo::{CabinPoint, TravelPath};
pub use ids::PassengerId;
pub use passenger::{BoardingStatus, Passenger, SeatAssignment};
pub use rng::SessionRng;
pub use roster::Roster;
pub use time::{SimClock, SimTime};
