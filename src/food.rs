use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Places food on the board from a single random source seeded once per run.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: StdRng,
    bounds: GridSize,
}

impl FoodSpawner {
    /// Creates a spawner seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(bounds: GridSize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            bounds,
        }
    }

    /// Creates a deterministic spawner for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(bounds: GridSize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bounds,
        }
    }

    /// Picks a cell for the next food, avoiding the snake's body.
    pub fn spawn(&mut self, snake: &Snake) -> Position {
        spawn_position(&mut self.rng, self.bounds, snake)
    }
}

/// Picks a uniformly random free cell inside `bounds`.
///
/// When the snake covers the whole board there is no free cell; any cell is
/// returned instead.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
    }

    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::{spawn_position, FoodSpawner};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut spawner = FoodSpawner::with_seed(
            GridSize {
                width: 8,
                height: 6,
            },
            7,
        );
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            assert!(!snake.occupies(spawner.spawn(&snake)));
        }
    }

    #[test]
    fn food_spawn_stays_inside_bounds_and_covers_free_cells() {
        let bounds = GridSize {
            width: 3,
            height: 2,
        };
        let mut spawner = FoodSpawner::with_seed(bounds, 11);
        let snake = Snake::new(Position { x: 0, y: 0 });

        let seen: HashSet<_> = (0..500).map(|_| spawner.spawn(&snake)).collect();

        assert!(seen.iter().all(|position| position.is_within_bounds(bounds)));
        assert_eq!(seen.len(), bounds.total_cells() - 1);
    }

    #[test]
    fn only_free_cell_is_chosen() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..20 {
            assert_eq!(
                spawn_position(&mut rng, bounds, &snake),
                Position { x: 0, y: 1 }
            );
        }
    }

    #[test]
    fn full_board_still_yields_a_cell() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = GridSize {
            width: 1,
            height: 2,
        };
        let snake = Snake::from_segments(vec![Position { x: 0, y: 0 }, Position { x: 0, y: 1 }]);

        let position = spawn_position(&mut rng, bounds, &snake);

        assert!(position.is_within_bounds(bounds));
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let bounds = GridSize::DEFAULT;
        let snake = Snake::new(bounds.center());
        let mut first = FoodSpawner::with_seed(bounds, 42);
        let mut second = FoodSpawner::with_seed(bounds, 42);

        for _ in 0..10 {
            assert_eq!(first.spawn(&snake), second.spawn(&snake));
        }
    }
}
