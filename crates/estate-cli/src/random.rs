//! Random estate generation.

use anyhow::{bail, Result};
use estate_core::{EstateShape, GridPathSequencer, Tree, MAX_TREE_HEIGHT, MIN_TREE_HEIGHT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::estate_file::EstateFile;

/// Largest tree count `random_estate` will plant; matches the server's default per-estate cap.
pub const MAX_RANDOM_TREES: usize = 1_000_000;

/// Build an estate with `tree_count` trees on distinct random plots.
pub fn random_estate(
    width: u32,
    length: u32,
    tree_count: usize,
    seed: Option<u64>,
) -> Result<EstateFile> {
    let shape = EstateShape::new(width, length)?;
    if tree_count > MAX_RANDOM_TREES {
        bail!("at most {} trees can be generated, got {}", MAX_RANDOM_TREES, tree_count);
    }
    let plots = shape.plot_count();
    if tree_count as u64 > plots {
        bail!("{} trees do not fit on {} plots", tree_count, plots);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let sequencer = GridPathSequencer::new(shape);
    let mut trees: Vec<Tree> = rand::seq::index::sample(&mut rng, plots as usize, tree_count)
        .into_iter()
        .map(|index| {
            let plot = sequencer.coord_at(index as u64);
            Tree::new(plot.x, plot.y, rng.random_range(MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT))
        })
        .collect();
    trees.sort_by_key(|tree| (tree.y, tree.x));

    Ok(EstateFile {
        width,
        length,
        trees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trees_land_on_distinct_plots() {
        let estate = random_estate(6, 4, 24, Some(1)).unwrap();
        assert_eq!(estate.trees.len(), 24);
        let plots: HashSet<(u32, u32)> = estate.trees.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(plots.len(), 24);
        assert!(estate
            .trees
            .iter()
            .all(|t| (MIN_TREE_HEIGHT..=MAX_TREE_HEIGHT).contains(&t.height)));
        assert!(estate.plan(None).is_ok());
    }

    #[test]
    fn same_seed_same_estate() {
        let a = random_estate(50, 50, 100, Some(99)).unwrap();
        let b = random_estate(50, 50, 100, Some(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_many_trees_is_an_error() {
        assert!(random_estate(2, 2, 5, Some(0)).is_err());
        assert!(random_estate(0, 2, 0, Some(0)).is_err());
        assert!(random_estate(50_000, 50_000, MAX_RANDOM_TREES + 1, Some(0)).is_err());
    }
}
