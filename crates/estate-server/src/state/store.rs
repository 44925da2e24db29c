//! In-memory estate store using DashMap.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use estate_core::{
    EstateShape, PathPlanner, PlanError, Plot, Tree, TreeStats, MAX_ESTATE_DIMENSION,
    MAX_TREE_HEIGHT, MIN_TREE_HEIGHT,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("estate {0} not found")]
    EstateNotFound(Uuid),
    #[error(
        "estate dimensions must be between 1 and {max}, got {width}x{length}",
        max = MAX_ESTATE_DIMENSION
    )]
    InvalidDimensions { width: i64, length: i64 },
    #[error("tree coordinates ({x}, {y}) are outside the estate")]
    TreeOutOfBounds { x: i64, y: i64 },
    #[error(
        "tree height must be between {min} and {max}, got {0}",
        min = MIN_TREE_HEIGHT,
        max = MAX_TREE_HEIGHT
    )]
    InvalidHeight(i64),
    #[error("plot ({x}, {y}) already holds a tree")]
    PlotOccupied { x: u32, y: u32 },
    #[error("estate already holds the maximum of {0} trees")]
    TooManyTrees(usize),
    #[error("max_distance must be positive, got {0}")]
    InvalidBudget(i64),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

#[derive(Debug, Clone)]
struct EstateRecord {
    shape: EstateShape,
    trees: Vec<Tree>,
    occupied: HashSet<Plot>,
    created_at: DateTime<Utc>,
}

/// Listing entry for an estate.
#[derive(Debug, Clone, Serialize)]
pub struct EstateSummary {
    pub id: Uuid,
    pub width: u32,
    pub length: u32,
    pub tree_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Drone plan for an estate. `rest` is only set when a budget was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DronePlan {
    pub distance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<Plot>,
}

/// Application state - thread-safe store for estates and their trees.
pub struct AppState {
    estates: DashMap<Uuid, EstateRecord>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            estates: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a new estate.
    pub fn create_estate(&self, width: i64, length: i64) -> Result<EstateSummary, StoreError> {
        let shape = match (u32::try_from(width), u32::try_from(length)) {
            (Ok(w), Ok(l)) => EstateShape::new(w, l).ok(),
            _ => None,
        }
        .ok_or(StoreError::InvalidDimensions { width, length })?;

        let id = Uuid::new_v4();
        let record = EstateRecord {
            shape,
            trees: Vec::new(),
            occupied: HashSet::new(),
            created_at: Utc::now(),
        };
        let summary = summarize(id, &record);
        self.estates.insert(id, record);
        Ok(summary)
    }

    /// Plant a tree on an estate plot.
    pub fn add_tree(&self, estate_id: Uuid, x: i64, y: i64, height: i64) -> Result<Uuid, StoreError> {
        let mut estate = self
            .estates
            .get_mut(&estate_id)
            .ok_or(StoreError::EstateNotFound(estate_id))?;

        let plot = match (u32::try_from(x), u32::try_from(y)) {
            (Ok(px), Ok(py)) if estate.shape.contains(px, py) => Plot::new(px, py),
            _ => return Err(StoreError::TreeOutOfBounds { x, y }),
        };
        let height = u32::try_from(height)
            .ok()
            .filter(|h| (MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT).contains(h))
            .ok_or(StoreError::InvalidHeight(height))?;

        if estate.trees.len() >= self.config.max_trees_per_estate {
            return Err(StoreError::TooManyTrees(self.config.max_trees_per_estate));
        }
        if !estate.occupied.insert(plot) {
            return Err(StoreError::PlotOccupied {
                x: plot.x,
                y: plot.y,
            });
        }

        let id = Uuid::new_v4();
        estate.trees.push(Tree::new(plot.x, plot.y, height));
        tracing::debug!(
            "Planted tree {} at ({}, {}) on estate {}",
            id,
            plot.x,
            plot.y,
            estate_id
        );
        Ok(id)
    }

    /// All estates, oldest first.
    pub fn list_estates(&self) -> Vec<EstateSummary> {
        let mut estates: Vec<EstateSummary> = self
            .estates
            .iter()
            .map(|entry| summarize(*entry.key(), entry.value()))
            .collect();
        estates.sort_by_key(|estate| estate.created_at);
        estates
    }

    pub fn tree_stats(&self, estate_id: Uuid) -> Result<TreeStats, StoreError> {
        let (_, trees) = self.snapshot(estate_id)?;
        Ok(TreeStats::from_trees(&trees))
    }

    /// Plan the drone sweep, optionally stopping at `max_distance`.
    pub fn drone_plan(&self, estate_id: Uuid, max_distance: Option<i64>) -> Result<DronePlan, StoreError> {
        let budget = match max_distance {
            Some(value) => Some(
                u64::try_from(value)
                    .ok()
                    .filter(|v| *v > 0)
                    .ok_or(StoreError::InvalidBudget(value))?,
            ),
            None => None,
        };

        let (shape, trees) = self.snapshot(estate_id)?;
        let planner = PathPlanner::new(shape, &trees)?;
        let plan = match budget {
            Some(budget) => {
                let path = planner.distance_with_budget(budget)?;
                DronePlan {
                    distance: path.distance,
                    rest: Some(path.landing),
                }
            }
            None => DronePlan {
                distance: planner.total_distance(),
                rest: None,
            },
        };

        tracing::debug!(
            "Drone plan for estate {} ({}x{}, {} trees): {:?}",
            estate_id,
            shape.width,
            shape.length,
            trees.len(),
            plan
        );
        Ok(plan)
    }

    /// Copy an estate's shape and trees out of the map so planning runs without holding a shard lock.
    fn snapshot(&self, estate_id: Uuid) -> Result<(EstateShape, Vec<Tree>), StoreError> {
        let estate = self
            .estates
            .get(&estate_id)
            .ok_or(StoreError::EstateNotFound(estate_id))?;
        Ok((estate.shape, estate.trees.clone()))
    }
}

fn summarize(id: Uuid, record: &EstateRecord) -> EstateSummary {
    EstateSummary {
        id,
        width: record.shape.width,
        length: record.shape.length,
        tree_count: record.trees.len(),
        created_at: record.created_at,
    }
}
