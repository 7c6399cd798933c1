//! Plain-text rendering of a [`RunReport`].

use std::fmt::Write;

use wc_sim::RunReport;

/// Render `report` as an aligned plain-text block for terminal output.
pub fn render_report(report: &RunReport) -> String {
    let s = &report.stats;
    let mut out = String::new();

    // Writing into a String never fails.
    let _ = writeln!(out, "Shift {} after {} ({} ticks)", report.outcome, report.minutes, report.ticks);
    let _ = writeln!(out);
    let _ = writeln!(out, "Waste");
    let _ = writeln!(out, "  initial            {}", report.initial_waste);
    let _ = writeln!(out, "  collected          {}", s.gross_collected);
    let _ = writeln!(out, "  delivered          {}", s.gross_delivered);
    let _ = writeln!(out, "  remaining          {}", report.waste_remaining);
    let _ = writeln!(out, "  compactions        {}", s.compactions);
    let _ = writeln!(out, "  landfill unloads   {}", s.truck_unloads);
    let _ = writeln!(out);
    let _ = writeln!(out, "Animals");
    let _ = writeln!(out, "  migrated           {}", s.animals_migrated);
    let _ = writeln!(out, "  captured           {}", s.animals_captured);
    let _ = writeln!(out, "  delivered          {}", s.animals_delivered);
    let _ = writeln!(out, "  shelter unloads    {}", s.capture_unloads);
    let _ = writeln!(
        out,
        "  remaining          {} ({})",
        report.animals_remaining.total(),
        report.animals_remaining.describe()
    );
    let _ = writeln!(out, "  capture requests   {}", s.capture_requests);
    let _ = writeln!(out, "  pest control calls {}", s.pest_control_requests);
    let _ = writeln!(out);
    let _ = writeln!(out, "Resources");
    let _ = writeln!(
        out,
        "  trucks             {} ({} added during the shift)",
        report.trucks_used, s.trucks_added
    );
    let _ = writeln!(out, "  capture vehicles   {}", report.capture_vehicles_used);
    let _ = writeln!(
        out,
        "  minimum crew       {} trucks, {} staff, {} capture vehicles",
        report.estimate.trucks, report.estimate.staff, report.estimate.capture_vehicles
    );
    out
}
