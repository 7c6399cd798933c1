//! The run-wide ordered event log.

use std::fmt;

use wc_core::{CaptureId, Minute, TruckId};

/// Who produced a timeline line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    Scheduler,
    Truck(TruckId),
    Capture(CaptureId),
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventSource::Scheduler  => f.write_str("scheduler"),
            EventSource::Truck(id)  => write!(f, "{id}"),
            EventSource::Capture(id) => write!(f, "{id}"),
        }
    }
}

/// One line of the global timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    pub at:      Minute,
    pub source:  EventSource,
    pub message: String,
}

impl fmt::Display for TimelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.at, self.source, self.message)
    }
}
