use std::collections::VecDeque;

use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::food::FoodSpawner;
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::snake::{Snake, TickResult};

/// Read-only view of the state a host needs to draw a frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub segments: &'a VecDeque<Cell>,
    pub food: Cell,
    pub score: u32,
}

/// Owns the live snake and drives it one tick per [`GameController::step`].
///
/// A terminating tick resets the snake immediately; there is no game-over
/// state.
#[derive(Debug, Clone)]
pub struct GameController<R = StdRng> {
    snake: Snake<R>,
    ticks: u64,
    runs: u64,
}

impl GameController<StdRng> {
    /// Creates a deterministic controller for tests and reproducible sessions.
    #[must_use]
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::new(FoodSpawner::seeded(grid, seed))
    }

    #[must_use]
    pub fn from_entropy(grid: Grid) -> Self {
        Self::new(FoodSpawner::from_entropy(grid))
    }
}

impl<R: Rng> GameController<R> {
    #[must_use]
    pub fn new(spawner: FoodSpawner<R>) -> Self {
        Self::from_snake(Snake::new(spawner))
    }

    /// Wraps an already positioned snake.
    #[must_use]
    pub fn from_snake(snake: Snake<R>) -> Self {
        Self {
            snake,
            ticks: 0,
            runs: 0,
        }
    }

    /// Requests a heading change; reversals are dropped.
    pub fn handle_input(&mut self, requested: Direction) {
        if !self.snake.set_direction(requested) {
            debug!(
                "ignored reversal to {requested:?} while heading {:?}",
                self.snake.direction()
            );
        }
    }

    /// Advances one tick, restarting the run on collision.
    pub fn step(&mut self) -> Snapshot<'_> {
        self.ticks += 1;

        if let TickResult::Terminated(collision) = self.snake.tick() {
            self.runs += 1;
            info!(
                "run {} ended by {collision} at {} with score {} (length {})",
                self.runs,
                self.snake.head(),
                self.snake.score(),
                self.snake.len(),
            );
            self.snake.reset();
        }

        self.snapshot()
    }
}

impl<R> GameController<R> {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.snake.grid(),
            segments: self.snake.segments(),
            food: self.snake.food(),
            score: self.snake.score(),
        }
    }

    #[must_use]
    pub fn snake(&self) -> &Snake<R> {
        &self.snake
    }

    /// Number of `step` calls so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of runs that ended in a collision.
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
