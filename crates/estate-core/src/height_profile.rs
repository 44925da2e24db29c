//! Clearance altitudes over an estate.

use std::collections::HashMap;

use crate::error::PlanError;
use crate::models::{EstateShape, Plot, Tree};
use crate::sequencer::GridPathSequencer;

/// Altitude kept above a plot with no tree.
pub const GROUND_CLEARANCE: u64 = 1;

/// A tree plot together with its place in the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedTree {
    pub rank: u64,
    pub clearance: u64,
}

/// Sparse clearance map: tree plots only, everything else sits at ground clearance.
#[derive(Debug, Clone)]
pub struct HeightProfile {
    clearances: HashMap<Plot, u64>,
}

impl HeightProfile {
    /// Index the trees of one estate.
    ///
    /// Fails on a tree outside the estate or on two trees sharing a plot.
    pub fn build(shape: EstateShape, trees: &[Tree]) -> Result<Self, PlanError> {
        let mut clearances = HashMap::with_capacity(trees.len());
        for tree in trees {
            if !shape.contains(tree.x, tree.y) {
                return Err(PlanError::InvalidTreePosition {
                    x: tree.x,
                    y: tree.y,
                    width: shape.width,
                    length: shape.length,
                });
            }
            let clearance = u64::from(tree.height) + GROUND_CLEARANCE;
            if clearances
                .insert(Plot::new(tree.x, tree.y), clearance)
                .is_some()
            {
                return Err(PlanError::DuplicateTree {
                    x: tree.x,
                    y: tree.y,
                });
            }
        }
        Ok(Self { clearances })
    }

    /// Altitude the drone must hold above `(x, y)`.
    pub fn clearance(&self, x: u32, y: u32) -> u64 {
        self.clearances
            .get(&Plot::new(x, y))
            .copied()
            .unwrap_or(GROUND_CLEARANCE)
    }

    pub fn tree_count(&self) -> usize {
        self.clearances.len()
    }

    /// Tree plots in sweep order.
    pub fn ranked_trees(&self, sequencer: &GridPathSequencer) -> Vec<RankedTree> {
        let mut ranked: Vec<RankedTree> = self
            .clearances
            .iter()
            .map(|(plot, &clearance)| RankedTree {
                rank: sequencer.rank_of(plot.x, plot.y),
                clearance,
            })
            .collect();
        ranked.sort_unstable_by_key(|tree| tree.rank);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_defaults_to_ground() {
        let shape = EstateShape::new(10, 10).unwrap();
        let profile = HeightProfile::build(shape, &[Tree::new(3, 4, 12)]).unwrap();
        assert_eq!(profile.clearance(3, 4), 13);
        assert_eq!(profile.clearance(4, 3), GROUND_CLEARANCE);
        assert_eq!(profile.tree_count(), 1);
    }

    #[test]
    fn rejects_tree_off_the_estate() {
        let shape = EstateShape::new(5, 5).unwrap();
        let err = HeightProfile::build(shape, &[Tree::new(6, 1, 3)]).unwrap_err();
        assert_eq!(
            err,
            PlanError::InvalidTreePosition {
                x: 6,
                y: 1,
                width: 5,
                length: 5
            }
        );

        let err = HeightProfile::build(shape, &[Tree::new(1, 0, 3)]).unwrap_err();
        assert!(matches!(err, PlanError::InvalidTreePosition { y: 0, .. }));
    }

    #[test]
    fn rejects_two_trees_on_one_plot() {
        let shape = EstateShape::new(5, 5).unwrap();
        let err = HeightProfile::build(shape, &[Tree::new(2, 2, 3), Tree::new(2, 2, 9)])
            .unwrap_err();
        assert_eq!(err, PlanError::DuplicateTree { x: 2, y: 2 });
    }

    #[test]
    fn ranks_follow_the_sweep() {
        let shape = EstateShape::new(3, 2).unwrap();
        let trees = [Tree::new(1, 2, 4), Tree::new(2, 1, 7), Tree::new(3, 2, 1)];
        let profile = HeightProfile::build(shape, &trees).unwrap();
        let ranked = profile.ranked_trees(&GridPathSequencer::new(shape));
        assert_eq!(
            ranked,
            vec![
                RankedTree { rank: 1, clearance: 8 },
                RankedTree { rank: 3, clearance: 2 },
                RankedTree { rank: 5, clearance: 5 },
            ]
        );
    }
}
