//! Drone distance over a full or budgeted estate sweep.
//!
//! The drone takes off from `(1, 1)`, holds one unit above the ground or one
//! unit above the tree beneath it, and lands on the final plot. Distance is
//! ground distance plus every climb and descent. Plots without a tree all
//! sit at the same clearance, so only tree plots change the altitude and the
//! planner walks the trees in sweep order instead of the plots.

use crate::error::PlanError;
use crate::height_profile::{HeightProfile, RankedTree, GROUND_CLEARANCE};
use crate::models::{BudgetedPath, EstateShape, Tree};
use crate::sequencer::GridPathSequencer;

/// Total distance of a full sweep.
pub fn total_distance(shape: EstateShape, trees: &[Tree]) -> Result<u64, PlanError> {
    Ok(PathPlanner::new(shape, trees)?.total_distance())
}

/// Distance flown until `max_distance` is reached, and the plot landed on.
pub fn distance_with_budget(
    shape: EstateShape,
    trees: &[Tree],
    max_distance: u64,
) -> Result<BudgetedPath, PlanError> {
    PathPlanner::new(shape, trees)?.distance_with_budget(max_distance)
}

/// Sweep planner for one estate.
#[derive(Debug, Clone)]
pub struct PathPlanner {
    sequencer: GridPathSequencer,
    trees: Vec<RankedTree>,
}

impl PathPlanner {
    pub fn new(shape: EstateShape, trees: &[Tree]) -> Result<Self, PlanError> {
        let sequencer = GridPathSequencer::new(shape);
        let profile = HeightProfile::build(shape, trees)?;
        let trees = profile.ranked_trees(&sequencer);
        Ok(Self { sequencer, trees })
    }

    pub fn sequencer(&self) -> &GridPathSequencer {
        &self.sequencer
    }

    /// Distance of the whole sweep, including take-off and the final landing.
    pub fn total_distance(&self) -> u64 {
        let mut altitude = 0;
        let mut vertical = 0;
        let mut next = 0;

        for tree in &self.trees {
            if tree.rank > next {
                // Treeless plots before this tree settle the drone at ground clearance.
                vertical += GROUND_CLEARANCE.abs_diff(altitude);
                altitude = GROUND_CLEARANCE;
            }
            vertical += tree.clearance.abs_diff(altitude);
            altitude = tree.clearance;
            next = tree.rank + 1;
        }

        if next <= self.sequencer.last_index() {
            vertical += GROUND_CLEARANCE.abs_diff(altitude);
            altitude = GROUND_CLEARANCE;
        }

        self.sequencer.horizontal_distance() + vertical + altitude
    }

    /// Fly the sweep until the cumulative distance reaches `max_distance`.
    ///
    /// The landing plot is the first plot whose arrival brings the distance to
    /// or past the budget; the reported distance may overshoot the budget. A
    /// budget the sweep never reaches lands on the final plot and includes the
    /// final descent, so it reports the same distance as [`total_distance`].
    ///
    /// [`total_distance`]: PathPlanner::total_distance
    pub fn distance_with_budget(&self, max_distance: u64) -> Result<BudgetedPath, PlanError> {
        if max_distance == 0 {
            return Err(PlanError::InvalidBudget(max_distance));
        }

        let mut walk = Walk::new(max_distance);
        let end = self.sequencer.plot_count();
        let stops = self
            .trees
            .iter()
            .map(|tree| (tree.rank, Some(tree.clearance)))
            .chain(std::iter::once((end, None)));

        for (rank, clearance) in stops {
            if let Some(index) = walk.cross_run(rank) {
                return Ok(self.land(index, walk.distance));
            }
            if let Some(clearance) = clearance {
                if walk.arrive(rank, clearance) {
                    return Ok(self.land(rank, walk.distance));
                }
            }
        }

        Ok(BudgetedPath {
            distance: walk.distance + walk.altitude,
            landing: self.sequencer.last_plot(),
        })
    }

    fn land(&self, index: u64, distance: u64) -> BudgetedPath {
        BudgetedPath {
            distance,
            landing: self.sequencer.coord_at(index),
        }
    }
}

/// Cumulative state of a budgeted sweep.
#[derive(Debug)]
struct Walk {
    budget: u64,
    distance: u64,
    altitude: u64,
    /// First plot not yet arrived at.
    next: u64,
}

impl Walk {
    fn new(budget: u64) -> Self {
        Self {
            budget,
            distance: 0,
            altitude: 0,
            next: 0,
        }
    }

    /// Cost of arriving at `index` with the given clearance.
    fn step_cost(&self, index: u64, clearance: u64) -> u64 {
        let horizontal = if index == 0 { 0 } else { 1 };
        horizontal + clearance.abs_diff(self.altitude)
    }

    /// Arrive at a single plot. Returns true once the budget is reached.
    fn arrive(&mut self, index: u64, clearance: u64) -> bool {
        self.distance += self.step_cost(index, clearance);
        self.altitude = clearance;
        self.next = index + 1;
        self.distance >= self.budget
    }

    /// Fly over the treeless plots `next..until`.
    ///
    /// Only the first plot of the run may change altitude; every later plot
    /// costs exactly one unit, so the crossing index is found arithmetically.
    /// Returns the landing index if the budget runs out inside the run.
    fn cross_run(&mut self, until: u64) -> Option<u64> {
        if until <= self.next {
            return None;
        }
        let first = self.next;
        if self.arrive(first, GROUND_CLEARANCE) {
            return Some(first);
        }

        let flat_steps = until - first - 1;
        let needed = self.budget - self.distance;
        if needed <= flat_steps {
            self.distance += needed;
            self.next = first + needed + 1;
            return Some(first + needed);
        }

        self.distance += flat_steps;
        self.next = until;
        None
    }
}
