//! `wc-sim`: the shift scheduler.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Done?    : every point clean → Completed.
//!   ② Collect  : each truck × each point with waste: Truck::collect,
//!                clock += returned minutes.
//!   ③ Grow     : overflow this tick → one more truck (bounded).
//!   ④ Migrate  : plan against a snapshot, then apply.
//!   ⑤ Capture  : dogs then cats, unloading at the shelter when full.
//!   ⑥ Budget   : clock ≥ budget with waste left → BudgetExceeded.
//! end of shift: every loaded vehicle unloads.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wc_core::{PointId, SimConfig};
//! use wc_graph::load_graph_path;
//! use wc_sim::{NoopObserver, SimBuilder};
//!
//! let graph = load_graph_path("points.txt".as_ref())?;
//! let mut sim = SimBuilder::new(SimConfig::default(), graph)
//!     .landfill(PointId(0))
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{ResourceEstimate, RunOutcome, RunReport, RunStatistics};
pub use timeline::{EventSource, TimelineEvent};
