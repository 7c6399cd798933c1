//! Graph-subsystem error type.
//!
//! Every variant except `NoRoute` means the input graph is invalid; those
//! are raised before a simulation starts and are fatal.

use thiserror::Error;

use wc_core::PointId;

/// Errors produced by `wc-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("{0} not found in graph")]
    PointNotFound(PointId),

    #[error("negative travel cost {cost} on edge {from} -> {to}")]
    NegativeWeight { from: PointId, to: PointId, cost: i64 },

    #[error("self-loop on {0}")]
    SelfLoop(PointId),

    #[error("edge {a} <-> {b} declared with costs {first} and {second}")]
    ConflictingEdge { a: PointId, b: PointId, first: u64, second: u64 },

    #[error("invalid waste volume {value} m³ at {point}")]
    InvalidWaste { point: PointId, value: f64 },

    #[error("total waste over all points is too large to represent")]
    WasteOverflow,

    #[error("no route from {from} to {to}")]
    NoRoute { from: PointId, to: PointId },

    #[error("parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// `true` for the load-time validation failures (malformed input).
    pub fn is_invalid_graph(&self) -> bool {
        !matches!(self, GraphError::NoRoute { .. } | GraphError::Io(_))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
