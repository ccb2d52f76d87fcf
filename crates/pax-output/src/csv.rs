//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `boarding_events.csv`
//! - `step_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, StepSummaryRow};

pub const EVENTS_FILE: &str = "boarding_events.csv";
pub const SUMMARIES_FILE: &str = "step_summaries.csv";

/// Writes boarding output to two CSV files.
pub struct CsvEventWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvEventWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["passenger_id", "kind", "time_secs", "boarded", "seated"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["step", "time_secs", "events", "boarded", "seated"])?;

        Ok(Self { events, summaries, finished: false })
    }
}

impl OutputWriter for CsvEventWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.passenger.to_string(),
                row.kind_label().to_owned(),
                format!("{:.3}", row.time_secs),
                row.boarded.to_string(),
                row.seated.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            format!("{:.3}", row.time_secs),
            row.events.to_string(),
            row.boarded.to_string(),
            row.seated.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
