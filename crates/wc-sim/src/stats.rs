//! Cumulative run counters, the final report, and the resource estimate.

use std::fmt;

use wc_core::{AnimalCounts, Minute, Volume};

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every point was cleaned.
    Completed,
    /// The time budget (or the tick cap) ran out with waste left.
    BudgetExceeded,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Completed      => "completed",
            RunOutcome::BudgetExceeded => "budget_exceeded",
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RunStatistics ─────────────────────────────────────────────────────────────

/// Counters the scheduler accumulates while the run is in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Waste taken from points, before compaction.
    pub gross_collected: Volume,
    /// Waste handed over at the landfill, before compaction.
    pub gross_delivered: Volume,
    pub compactions: u32,
    pub truck_unloads: u32,
    pub trucks_added: u32,
    pub animals_migrated: u32,
    pub animals_captured: u32,
    pub animals_delivered: u32,
    pub capture_unloads: u32,
    pub capture_requests: u32,
    pub pest_control_requests: u32,
}

// ── ResourceEstimate ──────────────────────────────────────────────────────────

/// Smallest crew that would have handled this run, by simple formulas.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResourceEstimate {
    pub trucks: usize,
    pub staff: u64,
    pub capture_vehicles: u32,
}

impl ResourceEstimate {
    /// `trucks_used` trucks with `staff_per_truck` each, and enough capture
    /// vehicles to hold every captured animal in one load each.
    pub fn from_run(
        trucks_used:      usize,
        staff_per_truck:  u32,
        animals_captured: u32,
        capture_capacity: u32,
    ) -> Self {
        Self {
            trucks: trucks_used,
            staff: trucks_used as u64 * staff_per_truck as u64,
            capture_vehicles: animals_captured.div_ceil(capture_capacity.max(1)),
        }
    }
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Everything a finished run reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Clock value after end-of-shift unloading.
    pub minutes: Minute,
    pub ticks: u64,
    pub trucks_used: usize,
    pub capture_vehicles_used: usize,
    pub initial_waste: Volume,
    pub stats: RunStatistics,
    /// Waste still at the points.
    pub waste_remaining: Volume,
    /// Animals still at the points, per kind.
    pub animals_remaining: AnimalCounts,
    pub estimate: ResourceEstimate,
}

impl RunReport {
    /// `metric, value` pairs in a fixed order, for tabular sinks.
    pub fn metrics(&self) -> Vec<(&'static str, String)> {
        let s = &self.stats;
        vec![
            ("outcome",                 self.outcome.to_string()),
            ("minutes",                 self.minutes.0.to_string()),
            ("ticks",                   self.ticks.to_string()),
            ("trucks_used",             self.trucks_used.to_string()),
            ("capture_vehicles_used",   self.capture_vehicles_used.to_string()),
            ("initial_waste_m3",        format!("{:.3}", self.initial_waste.as_m3())),
            ("collected_m3",            format!("{:.3}", s.gross_collected.as_m3())),
            ("delivered_m3",            format!("{:.3}", s.gross_delivered.as_m3())),
            ("remaining_m3",            format!("{:.3}", self.waste_remaining.as_m3())),
            ("compactions",             s.compactions.to_string()),
            ("truck_unloads",           s.truck_unloads.to_string()),
            ("animals_migrated",        s.animals_migrated.to_string()),
            ("animals_captured",        s.animals_captured.to_string()),
            ("animals_delivered",       s.animals_delivered.to_string()),
            ("animals_remaining",       self.animals_remaining.total().to_string()),
            ("capture_unloads",         s.capture_unloads.to_string()),
            ("capture_requests",        s.capture_requests.to_string()),
            ("pest_control_requests",   s.pest_control_requests.to_string()),
            ("min_trucks",              self.estimate.trucks.to_string()),
            ("min_staff",               self.estimate.staff.to_string()),
            ("min_capture_vehicles",    self.estimate.capture_vehicles.to_string()),
        ]
    }
}
