use std::collections::HashSet;

use grid_snake::food::FoodSpawner;
use grid_snake::grid::{Cell, Grid};
use grid_snake::input::Direction;
use grid_snake::snake::{Snake, TickResult};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn prop_random_play_keeps_snake_invariants(
        seed in any::<u64>(),
        count in 6u16..=16,
        inputs in prop::collection::vec(prop::option::of(direction()), 1..300),
    ) {
        let grid = Grid::new(count);
        let mut snake = Snake::new(FoodSpawner::seeded(grid, seed));

        for input in inputs {
            if let Some(requested) = input {
                let before = snake.direction();
                let accepted = snake.set_direction(requested);
                if requested == before.opposite() {
                    prop_assert!(!accepted);
                    prop_assert_eq!(snake.direction(), before);
                } else {
                    prop_assert_eq!(snake.direction(), requested);
                }
            }

            let food_before = snake.food();
            let score_before = snake.score();
            let len_before = snake.len();
            let expected_head = snake.head().step(snake.direction());

            match snake.tick() {
                TickResult::Continued => {
                    prop_assert_eq!(snake.head(), expected_head);
                    prop_assert!(grid.in_bounds(snake.head()));

                    let ate = expected_head == food_before;
                    prop_assert_eq!(snake.score(), score_before + u32::from(ate));
                    prop_assert_eq!(snake.len(), len_before + usize::from(ate));

                    let unique: HashSet<Cell> = snake.segments().iter().copied().collect();
                    prop_assert_eq!(unique.len(), snake.len());
                }
                TickResult::Terminated(_) => {
                    prop_assert_eq!(snake.score(), score_before);
                    prop_assert_eq!(snake.len(), len_before);

                    snake.reset();
                    prop_assert_eq!(snake.len(), 1);
                    prop_assert_eq!(snake.head(), grid.center());
                    prop_assert_eq!(snake.score(), 0);
                    prop_assert_eq!(snake.direction(), Direction::Right);
                }
            }

            prop_assert!(!snake.occupies(snake.food()));
            prop_assert!(grid.in_bounds(snake.food()));
        }
    }

    #[test]
    fn prop_spawned_food_avoids_occupied_cells(
        seed in any::<u64>(),
        occupied in prop::collection::hash_set((0i32..8, 0i32..8), 0..40),
    ) {
        let grid = Grid::new(8);
        let occupied: HashSet<Cell> = occupied.into_iter().map(|(x, y)| Cell::new(x, y)).collect();
        let mut spawner = FoodSpawner::seeded(grid, seed);

        let cell = spawner.spawn(&occupied);

        prop_assert!(grid.in_bounds(cell));
        prop_assert!(!occupied.contains(&cell));
    }
}
