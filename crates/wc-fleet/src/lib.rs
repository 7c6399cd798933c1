//! `wc-fleet`: the two vehicle kinds and their state machines.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`truck`]   | `Truck`, `CollectContext`, `CollectOutcome`               |
//! | [`capture`] | `CaptureVehicle`                                          |
//! | [`log`]     | `EventLog`, `LogEntry`: per-vehicle timestamped history  |
//! | [`error`]   | `FleetError`, `FleetResult<T>`                            |
//!
//! # Time
//!
//! Vehicles never touch the clock.  Every operation receives the current
//! `Minute`, stamps its log entries relative to it, and reports the minutes
//! it consumed; the scheduler in `wc-sim` advances the clock.

pub mod capture;
pub mod error;
pub mod log;
pub mod truck;


pub use capture::CaptureVehicle;
pub use error::{FleetError, FleetResult};
pub use log::{EventLog, LogEntry};
pub use truck::{CollectContext, CollectOutcome, Truck, MAX_COMPACTIONS};
