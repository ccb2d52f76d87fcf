//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, StepSummaryRow};

/// A sink for boarding output.
///
/// Errors are returned here but swallowed by
/// [`SessionOutputObserver`][crate::SessionOutputObserver], which keeps the
/// first one for [`take_error`][crate::SessionOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of events in firing order.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
