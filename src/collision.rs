use crate::config::GridSize;
use crate::snake::Snake;

/// Why the head position ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// Head left the board.
    Wall,
    /// Head ran into its own body.
    Body,
}

/// Classifies the current head position. The wall is checked first.
#[must_use]
pub fn detect(snake: &Snake, bounds: GridSize) -> Option<Collision> {
    if !snake.head().is_within_bounds(bounds) {
        return Some(Collision::Wall);
    }

    if snake.head_overlaps_body() {
        return Some(Collision::Body);
    }

    None
}

/// Returns true when the head position ends the game.
#[must_use]
pub fn is_terminal(snake: &Snake, bounds: GridSize) -> bool {
    detect(snake, bounds).is_some()
}
