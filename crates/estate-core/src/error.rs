//! Errors raised while planning a sweep.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The caller could not resolve the estate the plan was requested for.
    #[error("estate not found: {0}")]
    EstateNotFound(String),
    #[error("invalid estate dimensions {width}x{length}")]
    InvalidShape { width: u32, length: u32 },
    #[error("tree at ({x}, {y}) lies outside the {width}x{length} estate")]
    InvalidTreePosition {
        x: u32,
        y: u32,
        width: u32,
        length: u32,
    },
    #[error("more than one tree at ({x}, {y})")]
    DuplicateTree { x: u32, y: u32 },
    #[error("distance budget must be positive, got {0}")]
    InvalidBudget(u64),
}
