//! `pax-timeline` — the boarding timeline scheduler.
//!
//! # Model
//!
//! ```text
//! start(order):   task[i] = { start: i * stagger, duration: distance / speed }
//! advance(dt):    clock += dt; fire every due event in
//!                 (time, task order, Start before Complete) order
//! seek_to_end():  fire everything not yet fired, in task order
//! ```
//!
//! Tasks overlap whenever a walk lasts longer than the stagger, but every
//! state change goes through the single `advance` / `seek_to_end` step, so
//! events for one passenger can never race and observers see a strictly
//! serial stream.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ◀──resume── Paused
//!                   │  └────pause────▶  │
//!                   ├─ last event / seek_to_end ─▶ Completed
//!  any ──reset──▶ Idle
//! ```

pub mod error;
pub mod event;
pub mod queue;
pub mod task;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use error::{TimelineError, TimelineResult};
pub use event::{EventKind, NoopObserver, TimelineEvent, TimelineObserver};
pub use queue::{EventKey, EventQueue};
pub use task::{Task, TimelineConfig};
pub use timeline::{ControlOutcome, RunState, Timeline};
