//! `wc-core`: foundational types for the waste-collection simulation.
//!
//! Every other `wc-*` crate depends on this one.  It depends only on `rand`
//! and `thiserror`, plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PointId`, `EdgeId`, `TruckId`, `CaptureId`           |
//! | [`time`]        | `Minute`, `SimClock`                                  |
//! | [`volume`]      | `Volume` (exact litre arithmetic)                     |
//! | [`animal`]      | `AnimalKind`, `AnimalCounts`                          |
//! | [`config`]      | `SimConfig`, `SpawnRates`                             |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on ids, volumes and the config.  |

pub mod animal;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod volume;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use animal::{AnimalCounts, AnimalKind};
pub use config::{SimConfig, SpawnRates};
pub use error::{CoreError, CoreResult};
pub use ids::{CaptureId, EdgeId, PointId, TruckId};
pub use rng::SimRng;
pub use time::{Minute, SimClock};
pub use volume::Volume;
