//! Estate sweep planning.
//!
//! Computes the distance a monitoring drone flies while covering every plot
//! of an estate in boustrophedon order, in time bounded by the number of
//! trees rather than the number of plots.

pub mod error;
pub mod height_profile;
pub mod models;
pub mod planner;
pub mod sequencer;
pub mod stats;

pub use error::PlanError;
pub use height_profile::{HeightProfile, RankedTree, GROUND_CLEARANCE};
pub use models::{
    BudgetedPath, EstateShape, Plot, Tree, MAX_ESTATE_DIMENSION, MAX_TREE_HEIGHT,
    MIN_TREE_HEIGHT,
};
pub use planner::{distance_with_budget, total_distance, PathPlanner};
pub use sequencer::GridPathSequencer;
pub use stats::TreeStats;
