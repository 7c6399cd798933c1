use thiserror::Error;

use wc_core::{CoreError, PointId};
use wc_graph::GraphError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("{role} {point} is not a point of the graph")]
    UnknownPoint { role: &'static str, point: PointId },

    #[error("{role} {to} cannot be reached from {from}")]
    Unreachable { role: &'static str, from: PointId, to: PointId },

    #[error("{what} length {got} does not match point count {expected}")]
    PointCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
