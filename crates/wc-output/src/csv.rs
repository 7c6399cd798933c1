//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `timeline.csv`
//! - `ticks.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SummaryRow, TickSummaryRow, TimelineRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    timeline: Writer<File>,
    ticks:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut timeline = Writer::from_path(dir.join("timeline.csv"))?;
        timeline.write_record(["minute", "source", "message"])?;

        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record(["tick", "start_minute", "end_minute", "events"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["metric", "value"])?;

        Ok(Self { timeline, ticks, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[TimelineRow]) -> OutputResult<()> {
        for row in rows {
            let minute = row.minute.to_string();
            self.timeline
                .write_record([minute.as_str(), row.source.as_str(), row.message.as_str()])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.start_minute.to_string(),
            row.end_minute.to_string(),
            row.events.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record([row.metric, row.value.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timeline.flush()?;
        self.ticks.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
