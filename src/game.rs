use log::{debug, info};

use crate::collision::{self, Collision};
use crate::config::GridSize;
use crate::food::FoodSpawner;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Session lifecycle. `Terminal` is absorbing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Terminal,
}

/// What a single [`Session::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved without eating.
    Moved,
    /// The snake ate the food and grew by one segment.
    Ate,
    /// The move ended the session.
    Collided(Collision),
    /// Nothing happened; the session was already over.
    Idle,
}

/// Complete mutable game state for one run.
#[derive(Debug, Clone)]
pub struct Session {
    pub snake: Snake,
    pub heading: Direction,
    pub food: Position,
    pub status: GameStatus,
    pub tick_count: u64,
    pub food_eaten: u32,
    bounds: GridSize,
    spawner: FoodSpawner,
}

impl Session {
    /// Creates a session whose food placement is seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_spawner(bounds, FoodSpawner::from_entropy(bounds))
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_spawner(bounds, FoodSpawner::with_seed(bounds, seed))
    }

    fn with_spawner(bounds: GridSize, mut spawner: FoodSpawner) -> Self {
        let snake = Snake::new(bounds.center());
        let food = spawner.spawn(&snake);

        Self {
            snake,
            heading: Direction::Right,
            food,
            status: GameStatus::Running,
            tick_count: 0,
            food_eaten: 0,
            bounds,
            spawner,
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns true once a collision has ended the session.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    /// Applies one external input event. Quit is the loop's business.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                let _ = self.steer(direction);
            }
            GameInput::Quit => {}
        }
    }

    /// Accepts a new heading unless it reverses the current one.
    ///
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        if !direction_change_is_valid(self.heading, direction) {
            debug!("rejected reversal {:?} -> {direction:?}", self.heading);
            return false;
        }

        self.heading = direction;
        true
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let head = self.snake.advance(self.heading);

        let ate = head == self.food;
        if ate {
            self.snake.grow();
            self.food_eaten += 1;
            self.food = self.spawner.spawn(&self.snake);
            debug!(
                "food eaten at ({}, {}); length {}, next food at ({}, {})",
                head.x,
                head.y,
                self.snake.len(),
                self.food.x,
                self.food.y
            );
        } else {
            self.snake.shrink();
        }

        if let Some(collision) = collision::detect(&self.snake, self.bounds) {
            self.status = GameStatus::Terminal;
            info!(
                "collision with {collision:?} at ({}, {}) after {} ticks, length {}",
                head.x,
                head.y,
                self.tick_count,
                self.snake.len()
            );
            return TickOutcome::Collided(collision);
        }

        if ate { TickOutcome::Ate } else { TickOutcome::Moved }
    }
}
