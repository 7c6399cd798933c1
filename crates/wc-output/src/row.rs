//! Plain data row types written by output backends.

use wc_sim::TimelineEvent;

/// One timeline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub minute:  u64,
    /// `scheduler`, `truck N` or `capture vehicle N`.
    pub source:  String,
    pub message: String,
}

impl From<&TimelineEvent> for TimelineRow {
    fn from(e: &TimelineEvent) -> Self {
        Self {
            minute:  e.at.0,
            source:  e.source.to_string(),
            message: e.message.clone(),
        }
    }
}

/// Clock span and event count of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub start_minute: u64,
    pub end_minute:   u64,
    pub events:       u64,
}

/// One `metric, value` line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub metric: &'static str,
    pub value:  String,
}
