//! `pax-session` — the boarding session coordinator.
//!
//! # One run
//!
//! ```text
//! start_boarding():
//!   ① Allocate  — fresh roster; fill each seat wave in turn
//!                 (window → aisle → middle by default).
//!   ② Sequence  — order the roster with the configured strategy.
//!   ③ Schedule  — hand the ordered passengers to the timeline.
//!
//! advance(dt) / complete_boarding_now():
//!   ④ Apply     — each fired timeline event updates one passenger's
//!                 status and exactly one counter, then reaches the
//!                 observer.
//! ```
//!
//! Counters are never written except in step ④, so `boarded` and `seated`
//! always equal the number of `Start` and `Complete` events applied since
//! the last start or reset.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pax_seating::BoardingStrategy;
//! use pax_session::{BoardingSession, EventLog};
//!
//! let mut session = BoardingSession::configure(125, BoardingStrategy::BackToFront)?;
//! session.start_boarding()?;
//! let mut log = EventLog::default();
//! while !session.is_complete() {
//!     session.advance(1.0 / 30.0, &mut log);
//! }
//! assert_eq!(session.counters().seated, 125);
//! ```

pub mod builder;
pub mod config;
pub mod counters;
pub mod error;
pub mod observer;
pub mod session;
pub mod snapshot;


pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use counters::Counters;
pub use error::{SessionError, SessionResult};
pub use observer::{BoardingEvent, EventLog, NoopObserver, SessionObserver};
pub use session::BoardingSession;
pub use snapshot::{PassengerView, SeatMap, Snapshot};

pub use pax_timeline::{ControlOutcome, EventKind, RunState};
