//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `wc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid volume {0} m³: must be finite, non-negative and at most 1e9")]
    InvalidVolume(f64),
}

/// Shorthand result type for `wc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
