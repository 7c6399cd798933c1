//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SummaryRow, TickSummaryRow, TimelineRow};

/// A sink for run output.
///
/// Errors are surfaced to the observer, which stores them for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Append timeline lines.
    fn write_events(&mut self, rows: &[TimelineRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run metrics.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
