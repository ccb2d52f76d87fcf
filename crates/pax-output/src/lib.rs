//! `pax-output` — boarding run recorders.
//!
//! | Type                      | Role                                              |
//! |---------------------------|---------------------------------------------------|
//! | [`OutputWriter`]          | backend trait: event batches, step summaries      |
//! | [`CsvEventWriter`]        | `boarding_events.csv`, `step_summaries.csv`       |
//! | [`SessionOutputObserver`] | `SessionObserver` that feeds any `OutputWriter`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pax_output::{CsvEventWriter, SessionOutputObserver};
//!
//! let writer = CsvEventWriter::new(Path::new("./output"))?;
//! let mut obs = SessionOutputObserver::new(writer);
//! session.start_boarding()?;
//! while !session.is_complete() {
//!     session.advance(0.1, &mut obs);
//! }
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SessionOutputObserver;
pub use row::{EventRow, StepSummaryRow};
pub use writer::OutputWriter;
