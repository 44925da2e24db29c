//! Core data models for estate sweeps.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Largest accepted estate side, in plots.
pub const MAX_ESTATE_DIMENSION: u32 = 50_000;
/// Shortest tree accepted by the estate service.
pub const MIN_TREE_HEIGHT: u32 = 1;
/// Tallest tree accepted by the estate service.
pub const MAX_TREE_HEIGHT: u32 = 30;

/// Rectangular estate dimensions, in plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateShape {
    pub width: u32,
    pub length: u32,
}

impl EstateShape {
    /// Build a shape, rejecting sides outside `1..=MAX_ESTATE_DIMENSION`.
    pub fn new(width: u32, length: u32) -> Result<Self, PlanError> {
        let valid = |side: u32| (1..=MAX_ESTATE_DIMENSION).contains(&side);
        if !valid(width) || !valid(length) {
            return Err(PlanError::InvalidShape { width, length });
        }
        Ok(Self { width, length })
    }

    /// Number of plots on the estate.
    pub fn plot_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.length)
    }

    /// Whether `(x, y)` lies on the estate.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.length).contains(&y)
    }
}

/// A tree standing on one plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub x: u32,
    pub y: u32,
    pub height: u32,
}

impl Tree {
    pub fn new(x: u32, y: u32, height: u32) -> Self {
        Self { x, y, height }
    }
}

/// A plot coordinate. `(1, 1)` is the south-western corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plot {
    pub x: u32,
    pub y: u32,
}

impl Plot {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Outcome of a sweep that stops once a distance budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetedPath {
    /// Distance flown up to and including the arrival at `landing`.
    pub distance: u64,
    /// Plot where the drone sets down to recharge.
    pub landing: Plot,
}
