//! `wc-points`: Structure-of-Arrays storage for mutable collection-point
//! state.
//!
//! The static topology (neighbors, travel costs) lives in
//! `wc_graph::CollectionGraph`.  Everything a run mutates per point lives
//! here, indexed by `PointId`:
//!
//! | Array      | Written by                                  |
//! |------------|---------------------------------------------|
//! | `waste`    | trucks (`wc-fleet`)                         |
//! | `animals`  | spawn/migration (`wc-fauna`), capture fleet |

pub mod store;


pub use store::{PointSlot, PointStore};
