use std::collections::{HashSet, VecDeque};
use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::food::FoodSpawner;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, direction_change_is_valid};

/// What the head ran into on a terminating tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBody,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wall => "wall collision",
            Self::SelfBody => "self collision",
        })
    }
}

/// Outcome of one simulation step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    Continued,
    /// The run is over; the snake is left untouched until [`Snake::reset`].
    Terminated(Collision),
}

impl TickResult {
    #[must_use]
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated(_))
    }
}

/// Snake body, heading, score and the food it is chasing.
#[derive(Debug, Clone)]
pub struct Snake<R = StdRng> {
    body: VecDeque<Cell>,
    direction: Direction,
    score: u32,
    food: Cell,
    spawner: FoodSpawner<R>,
}

impl<R: Rng> Snake<R> {
    /// Creates a one-cell snake at the grid center heading right.
    #[must_use]
    pub fn new(spawner: FoodSpawner<R>) -> Self {
        let start = spawner.grid().center();
        Self::from_segments(spawner, vec![start], Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head) and places
    /// food on a free cell.
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(
        spawner: FoodSpawner<R>,
        segments: Vec<Cell>,
        direction: Direction,
    ) -> Self {
        assert!(
            !segments.is_empty(),
            "snake needs at least one segment"
        );

        let mut snake = Self {
            food: segments[0],
            body: VecDeque::from(segments),
            direction,
            score: 0,
            spawner,
        };
        snake.food = snake.spawn_food();
        snake
    }

    /// Starts a fresh run: one segment at the center, heading right, score 0.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.grid().center());
        self.direction = Direction::Right;
        self.score = 0;
        self.food = self.spawn_food();
    }

    /// Changes heading unless `requested` reverses the current one.
    ///
    /// Returns whether the change was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.direction, requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advances the snake by one cell.
    ///
    /// The self-collision check runs against the body before the tail moves,
    /// so entering the cell the tail is about to vacate still terminates.
    pub fn tick(&mut self) -> TickResult {
        let next_head = self.head().step(self.direction);

        if !self.grid().in_bounds(next_head) {
            return TickResult::Terminated(Collision::Wall);
        }

        if self.body.iter().skip(1).any(|segment| *segment == next_head) {
            return TickResult::Terminated(Collision::SelfBody);
        }

        self.body.push_front(next_head);

        if next_head == self.food {
            self.score += 1;
            self.food = self.spawn_food();
        } else {
            let _ = self.body.pop_back();
        }

        TickResult::Continued
    }

    /// Overrides the current food cell.
    ///
    /// The cell must be free; intended for scripted scenarios.
    pub fn place_food(&mut self, cell: Cell) {
        debug_assert!(!self.occupies(cell), "food placed on the snake at {cell}");
        self.food = cell;
    }

    fn spawn_food(&mut self) -> Cell {
        let occupied: HashSet<Cell> = self.body.iter().copied().collect();
        self.spawner.spawn(&occupied)
    }
}

impl<R> Snake<R> {
    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.spawner.grid()
    }
}
