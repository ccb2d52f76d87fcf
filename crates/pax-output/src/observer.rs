//! `SessionOutputObserver<W>` — bridges `SessionObserver` to an `OutputWriter`.

use pax_core::SimTime;
use pax_session::{BoardingEvent, Counters, SessionObserver};

use crate::row::{EventRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes every event and one summary per clock
/// step to an [`OutputWriter`].
///
/// Events are buffered and written as one batch at the end of their step.
/// The writer is finished after the step in which boarding completes.
/// Writer errors are stored because observer methods return nothing; check
/// [`take_error`][Self::take_error] once the run is over.
pub struct SessionOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    step:       u64,
    complete:   bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SessionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            step:       0,
            complete:   false,
            last_error: None,
        }
    }

    /// Steps summarised so far.
    pub fn steps(&self) -> u64 {
        self.step
    }

    /// Flush any buffered events and finish the writer.  Call this when a
    /// run is abandoned before it completes.
    pub fn finish(&mut self) {
        self.flush_events();
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for SessionOutputObserver<W> {
    fn on_event(&mut self, event: &BoardingEvent, counters: Counters) {
        self.pending.push(EventRow::new(event, counters));
    }

    fn on_step_end(&mut self, now: SimTime, counters: Counters) {
        let row = StepSummaryRow::new(self.step, now, self.pending.len(), counters);
        self.step += 1;
        self.flush_events();
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);

        if self.complete {
            self.finish();
        }
    }

    fn on_boarding_complete(&mut self, _now: SimTime, _counters: Counters) {
        self.complete = true;
    }
}
