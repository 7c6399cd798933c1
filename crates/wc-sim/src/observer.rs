//! Simulation observer trait for progress reporting and data collection.

use wc_core::Minute;

use crate::{RunReport, TimelineEvent};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: u64, now: Minute) {
///         println!("tick {tick} done at {now}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: u64, _now: Minute) {}

    /// Called for every timeline event, in timeline order, as it happens.
    fn on_event(&mut self, _event: &TimelineEvent) {}

    /// Called at the end of each tick with the clock after the tick's work.
    fn on_tick_end(&mut self, _tick: u64, _now: Minute) {}

    /// Called once after end-of-shift unloading, with the final report.
    fn on_sim_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
