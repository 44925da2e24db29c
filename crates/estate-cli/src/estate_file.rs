//! Estate description files.

use anyhow::{bail, Context, Result};
use estate_core::{EstateShape, PathPlanner, Plot, Tree, MAX_TREE_HEIGHT, MIN_TREE_HEIGHT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An estate with its trees, as read from or written to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateFile {
    pub width: u32,
    pub length: u32,
    #[serde(default)]
    pub trees: Vec<Tree>,
}

/// Plan printed by the CLI. Matches the server's drone plan body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOutput {
    pub distance: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<Plot>,
}

impl EstateFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid estate file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn shape(&self) -> Result<EstateShape> {
        Ok(EstateShape::new(self.width, self.length)?)
    }

    /// Reject trees the server would refuse to plant.
    pub fn check_heights(&self) -> Result<()> {
        for tree in &self.trees {
            if !(MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT).contains(&tree.height) {
                bail!(
                    "tree at ({}, {}) has height {}, must be between {} and {}",
                    tree.x,
                    tree.y,
                    tree.height,
                    MIN_TREE_HEIGHT,
                    MAX_TREE_HEIGHT
                );
            }
        }
        Ok(())
    }

    /// Plan the sweep locally, stopping at `max_distance` when given.
    pub fn plan(&self, max_distance: Option<u64>) -> Result<PlanOutput> {
        self.check_heights()?;
        let planner = PathPlanner::new(self.shape()?, &self.trees)?;
        let output = match max_distance {
            Some(budget) => {
                let path = planner.distance_with_budget(budget)?;
                PlanOutput {
                    distance: path.distance,
                    rest: Some(path.landing),
                }
            }
            None => PlanOutput {
                distance: planner.total_distance(),
                rest: None,
            },
        };
        Ok(output)
    }
}
