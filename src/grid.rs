use std::fmt;

use rand::Rng;

use crate::config::GRID_COUNT;
use crate::input::Direction;

/// One grid square, addressed by column (`x`) and row (`y`).
///
/// Coordinates are signed so a step off the left or top edge is still
/// representable and can be rejected by [`Grid::in_bounds`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square playing field of `count × count` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    count: u16,
}

impl Grid {
    /// Creates a grid with `count` cells per side.
    ///
    /// # Panics
    ///
    /// Panics when `count` is zero.
    #[must_use]
    pub const fn new(count: u16) -> Self {
        assert!(count > 0, "grid must have at least one cell per side");
        Self { count }
    }

    /// Cells per side.
    #[must_use]
    pub fn count(self) -> u16 {
        self.count
    }

    /// Returns true when both coordinates lie in `[0, count)`.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        let upper = i32::from(self.count);
        (0..upper).contains(&cell.x) && (0..upper).contains(&cell.y)
    }

    /// Spawn cell of a fresh snake.
    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.count / 2);
        Cell::new(mid, mid)
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.count) * usize::from(self.count)
    }

    /// Draws a uniformly distributed cell, column and row independently.
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let upper = i32::from(self.count);
        let x = rng.gen_range(0..upper);
        let y = rng.gen_range(0..upper);
        Cell::new(x, y)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_COUNT)
    }
}
