use ratatui::style::Color;

use crate::snake::Position;

/// Window width in pixels.
pub const SCREEN_WIDTH: u16 = 800;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u16 = 600;

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: u16 = 20;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// The fixed board: 40×30 cells.
    pub const DEFAULT: Self = Self {
        width: SCREEN_WIDTH / CELL_SIZE,
        height: SCREEN_HEIGHT / CELL_SIZE,
    };

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell the snake starts on.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the pixel origin (top-left corner) of a grid cell.
#[must_use]
pub fn cell_to_pixel(position: Position) -> (i32, i32) {
    let cell = i32::from(CELL_SIZE);
    (position.x * cell, position.y * cell)
}

/// Fixed delay between gameplay ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Frame clear color.
pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);

/// Fill color for every snake segment.
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Fill color for the food cell.
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Terminal columns used to draw one grid cell (terminal cells are roughly twice as tall as wide).
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;

/// Per-user directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "snake-arcade";

/// Log file name inside [`APP_DIR_NAME`].
pub const LOG_FILE_NAME: &str = "snake-arcade.log";
