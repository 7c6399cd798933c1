//! `wc-output`: run output for the waste-collection simulation.
//!
//! [`CsvWriter`] creates three files in the output directory:
//!
//! | File           | Columns                                        |
//! |----------------|------------------------------------------------|
//! | `timeline.csv` | `minute, source, message`                      |
//! | `ticks.csv`    | `tick, start_minute, end_minute, events`       |
//! | `summary.csv`  | `metric, value`                                |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wc_sim::SimObserver`.
//! [`render_report`] formats the final report as plain text for a terminal.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wc_output::{render_report, CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! print!("{}", render_report(&report));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::render_report;
pub use row::{SummaryRow, TickSummaryRow, TimelineRow};
pub use writer::OutputWriter;
