//! Boustrophedon sweep order over an estate.
//!
//! Rows are flown south to north. Odd rows run west to east, even rows run
//! east to west, so every pair of consecutive plots is one unit apart and a
//! row always ends above the plot where the next one starts.

use crate::models::{EstateShape, Plot};

/// Bijection between visit index and plot coordinate for one estate.
#[derive(Debug, Clone, Copy)]
pub struct GridPathSequencer {
    width: u64,
    length: u64,
}

impl GridPathSequencer {
    pub fn new(shape: EstateShape) -> Self {
        Self {
            width: u64::from(shape.width),
            length: u64::from(shape.length),
        }
    }

    /// Visit index of `(x, y)`. The coordinate must lie on the estate.
    pub fn rank_of(&self, x: u32, y: u32) -> u64 {
        let row = u64::from(y) - 1;
        let offset = if row % 2 == 0 {
            u64::from(x) - 1
        } else {
            self.width - u64::from(x)
        };
        row * self.width + offset
    }

    /// Plot visited at `index`. The index must be below `plot_count()`.
    pub fn coord_at(&self, index: u64) -> Plot {
        let row = index / self.width;
        let offset = index % self.width;
        let x = if row % 2 == 0 {
            offset + 1
        } else {
            self.width - offset
        };
        // Both fit: x <= width and row < length, each bounded by a u32 side.
        Plot::new(x as u32, (row + 1) as u32)
    }

    pub fn plot_count(&self) -> u64 {
        self.width * self.length
    }

    /// Index of the final plot of the sweep.
    pub fn last_index(&self) -> u64 {
        self.plot_count() - 1
    }

    pub fn last_plot(&self) -> Plot {
        self.coord_at(self.last_index())
    }

    /// Ground distance of the whole sweep: one unit per step between plots.
    pub fn horizontal_distance(&self) -> u64 {
        self.plot_count() - 1
    }
}
