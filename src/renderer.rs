use std::io;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Terminal;

use crate::config::{
    cell_to_pixel, BACKGROUND_COLOR, CELL_SIZE, FOOD_COLOR, SNAKE_COLOR,
    TERMINAL_COLUMNS_PER_CELL,
};
use crate::game::Session;
use crate::snake::Position;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl PixelRect {
    /// Returns the rectangle covering one grid cell.
    #[must_use]
    pub fn for_cell(position: Position) -> Self {
        let (x, y) = cell_to_pixel(position);
        Self {
            x,
            y,
            width: CELL_SIZE,
            height: CELL_SIZE,
        }
    }
}

/// Minimal drawing surface the game needs from a graphics backend.
pub trait Surface {
    /// Starts a new frame filled with `color`.
    fn clear(&mut self, color: Color);

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    /// Shows the frame built since the last [`Surface::clear`].
    fn present(&mut self) -> io::Result<()>;
}

/// Draws one full frame of `session`: every snake segment, then the food.
pub fn draw_session<S: Surface + ?Sized>(surface: &mut S, session: &Session) -> io::Result<()> {
    surface.clear(BACKGROUND_COLOR);
    for segment in session.snake.segments() {
        surface.fill_rect(PixelRect::for_cell(*segment), SNAKE_COLOR);
    }
    surface.fill_rect(PixelRect::for_cell(session.food), FOOD_COLOR);
    surface.present()
}

/// [`Surface`] backed by a ratatui terminal.
///
/// One grid cell maps to [`TERMINAL_COLUMNS_PER_CELL`] columns by one row.
/// Fills are queued and flushed in a single `Terminal::draw` on present.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    background: Color,
    fills: Vec<(PixelRect, Color)>,
}

impl<B: Backend> TerminalSurface<B> {
    #[must_use]
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            background: BACKGROUND_COLOR,
            fills: Vec::new(),
        }
    }

    /// Returns the wrapped terminal.
    #[must_use]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.fills.clear();
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.fills.push((rect, color));
    }

    fn present(&mut self) -> io::Result<()> {
        let background = self.background;
        let fills = &self.fills;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let buffer = frame.buffer_mut();
            buffer.set_style(area, Style::new().bg(background));

            for (rect, color) in fills {
                let Some(cells) = pixel_to_terminal(*rect, area) else {
                    continue;
                };
                buffer.set_style(cells, Style::new().bg(*color));
            }
        })?;

        Ok(())
    }
}

/// Maps a pixel rectangle onto terminal cells, clipped to `area`.
fn pixel_to_terminal(rect: PixelRect, area: Rect) -> Option<Rect> {
    let cell = i32::from(CELL_SIZE);
    let columns = i32::from(TERMINAL_COLUMNS_PER_CELL);

    let left = rect.x.div_euclid(cell) * columns;
    let top = rect.y.div_euclid(cell);
    let right = (rect.x + i32::from(rect.width)).div_euclid(cell) * columns;
    let bottom = (rect.y + i32::from(rect.height)).div_euclid(cell);

    let left = left.max(0);
    let top = top.max(0);
    if right <= left || bottom <= top {
        return None;
    }

    let x = u16::try_from(left).ok()?;
    let y = u16::try_from(top).ok()?;
    let width = u16::try_from(right - left).ok()?;
    let height = u16::try_from(bottom - top).ok()?;

    let clipped = Rect::new(area.x.saturating_add(x), area.y.saturating_add(y), width, height)
        .intersection(area);
    if clipped.is_empty() {
        return None;
    }

    Some(clipped)
}
