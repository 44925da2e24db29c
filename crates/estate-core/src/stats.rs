//! Height statistics over the trees of an estate.

use serde::{Deserialize, Serialize};

use crate::models::Tree;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub count: usize,
    pub max_height: u32,
    pub min_height: u32,
    /// Middle height; the floor of the mean of the two middle heights when
    /// the count is even.
    pub median_height: u32,
}

impl TreeStats {
    /// Summarize tree heights. An estate without trees reports all zeros.
    pub fn from_trees(trees: &[Tree]) -> Self {
        let mut heights: Vec<u32> = trees.iter().map(|tree| tree.height).collect();
        heights.sort_unstable();

        let (Some(&min_height), Some(&max_height)) = (heights.first(), heights.last()) else {
            return Self::default();
        };

        let count = heights.len();
        let median_height = if count % 2 == 0 {
            let sum = u64::from(heights[count / 2 - 1]) + u64::from(heights[count / 2]);
            // The mean of two u32 values fits back into u32.
            (sum / 2) as u32
        } else {
            heights[count / 2]
        };

        Self {
            count,
            max_height,
            min_height,
            median_height,
        }
    }
}
