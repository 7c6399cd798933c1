//! `wc-graph`: collection-point graph, routing, and point-list loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `CollectionGraph` (CSR), `GraphBuilder` with validation     |
//! | [`router`]  | `Router` trait, `CostTable`, `DijkstraRouter`, `RouteCache` |
//! | [`loader`]  | `load_graph_path`, `load_graph_reader` (text point list)    |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the `wc-core` types.    |

pub mod error;
pub mod loader;
pub mod network;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use loader::{load_graph_path, load_graph_reader};
pub use network::{CollectionGraph, GraphBuilder};
pub use router::{shortest_path_costs, CostTable, DijkstraRouter, RouteCache, Router};
