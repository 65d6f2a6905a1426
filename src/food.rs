use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};

/// Places food on random free cells of a grid.
///
/// The random source is a type parameter so tests and replays can inject a
/// seeded generator.
#[derive(Debug, Clone)]
pub struct FoodSpawner<R = StdRng> {
    grid: Grid,
    rng: R,
}

impl FoodSpawner<StdRng> {
    /// Creates a reproducible spawner.
    #[must_use]
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self::new(grid, StdRng::seed_from_u64(seed))
    }

    /// Creates a spawner seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(grid: Grid) -> Self {
        Self::new(grid, StdRng::from_entropy())
    }
}

impl<R> FoodSpawner<R> {
    #[must_use]
    pub fn new(grid: Grid, rng: R) -> Self {
        Self { grid, rng }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }
}

impl<R: Rng> FoodSpawner<R> {
    /// Returns a uniformly random cell that is not in `occupied`.
    ///
    /// Draws cells until a free one comes up, so `occupied` must leave at
    /// least one grid cell free or this never returns.
    pub fn spawn(&mut self, occupied: &HashSet<Cell>) -> Cell {
        debug_assert!(
            occupied.len() < self.grid.total_cells(),
            "spawn: no free cells on the {0}x{0} grid",
            self.grid.count(),
        );

        let mut attempts = 1_u32;
        loop {
            let cell = self.grid.random_cell(&mut self.rng);
            if !occupied.contains(&cell) {
                debug!("food placed at {cell} after {attempts} draw(s)");
                return cell;
            }
            attempts += 1;
        }
    }
}
