//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while constructing core data structures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("a {width}x{height} grid has more cells than a `CellIndex` can address")]
    TooManyCells { width: i32, height: i32 },

    #[error("cost array holds {got} cells but a {width}x{height} grid needs {expected}")]
    CostCountMismatch {
        width:    i32,
        height:   i32,
        expected: usize,
        got:      usize,
    },

    #[error("trajectory must contain at least one position")]
    EmptyTrajectory,
}

/// Shorthand result type for `pt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
