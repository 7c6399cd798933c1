//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wc_core::Minute;
use wc_sim::{RunReport, SimObserver, TimelineEvent};

use crate::row::{SummaryRow, TickSummaryRow, TimelineRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams the timeline, one summary row per tick, and
/// the final metrics to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    tick_start:  Minute,
    tick_events: u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tick_start:  Minute::ZERO,
            tick_events: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_start(&mut self, _tick: u64, now: Minute) {
        self.tick_start = now;
        self.tick_events = 0;
    }

    fn on_event(&mut self, event: &TimelineEvent) {
        self.tick_events += 1;
        let result = self.writer.write_events(&[TimelineRow::from(event)]);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: u64, now: Minute) {
        let row = TickSummaryRow {
            tick,
            start_minute: self.tick_start.0,
            end_minute:   now.0,
            events:       self.tick_events,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        let rows: Vec<SummaryRow> = report
            .metrics()
            .into_iter()
            .map(|(metric, value)| SummaryRow { metric, value })
            .collect();
        let result = self.writer.write_summary(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
