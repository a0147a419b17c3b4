use std::io;
use std::thread;
use std::time::Duration;

use crate::config::GridSize;
use crate::error::GameError;
use crate::game::Session;
use crate::input::{GameInput, InputHandler};
use crate::renderer::{draw_session, Surface};

/// Poll-style source of game inputs, drained once per tick.
pub trait InputSource {
    /// Returns every input that arrived since the last call, oldest first.
    fn poll_events(&mut self) -> io::Result<Vec<GameInput>>;
}

impl InputSource for InputHandler {
    fn poll_events(&mut self) -> io::Result<Vec<GameInput>> {
        InputHandler::poll_events(self)
    }
}

/// How the loop ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunEnd {
    Collided,
    Quit,
}

/// Acquires the display, then creates the session.
///
/// A display that fails to come up leaves no game state behind.
pub fn start<D, F>(enter: F, bounds: GridSize, seed: Option<u64>) -> Result<(D, Session), GameError>
where
    F: FnOnce() -> Result<D, GameError>,
{
    let display = enter()?;
    let session = match seed {
        Some(seed) => Session::new_with_seed(bounds, seed),
        None => Session::new(bounds),
    };

    Ok((display, session))
}

/// Runs ticks until a collision or a quit request: drain input, tick, draw, sleep.
pub fn run_loop<S, I>(
    surface: &mut S,
    input: &mut I,
    session: &mut Session,
    tick_interval: Duration,
) -> Result<RunEnd, GameError>
where
    S: Surface + ?Sized,
    I: InputSource + ?Sized,
{
    draw_session(surface, session)?;

    loop {
        for game_input in input.poll_events()? {
            if matches!(game_input, GameInput::Quit) {
                return Ok(RunEnd::Quit);
            }

            session.apply_input(game_input);
        }

        session.tick();
        draw_session(surface, session)?;

        if session.is_over() {
            return Ok(RunEnd::Collided);
        }

        thread::sleep(tick_interval);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::io;
    use std::time::Duration;

    use ratatui::style::Color;

    use crate::config::GridSize;
    use crate::error::GameError;
    use crate::game::GameStatus;
    use crate::input::{Direction, GameInput};
    use crate::renderer::{PixelRect, Surface};
    use crate::snake::Position;

    use super::{run_loop, start, InputSource, RunEnd};

    #[derive(Default)]
    struct CountingSurface {
        frames: usize,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self, _color: Color) {}

        fn fill_rect(&mut self, _rect: PixelRect, _color: Color) {}

        fn present(&mut self) -> io::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    struct ScriptedInput {
        batches: VecDeque<Vec<GameInput>>,
    }

    impl InputSource for ScriptedInput {
        fn poll_events(&mut self) -> io::Result<Vec<GameInput>> {
            Ok(self.batches.pop_front().unwrap_or_default())
        }
    }

    #[test]
    fn failed_display_creates_no_session() {
        let result = start(
            || -> Result<(), GameError> {
                Err(GameError::Initialization(io::Error::other("no tty")))
            },
            GridSize::DEFAULT,
            Some(1),
        );

        assert!(matches!(result, Err(GameError::Initialization(_))));
    }

    #[test]
    fn session_is_built_after_display_comes_up() {
        let entered = Cell::new(false);

        let (_, session) = start(
            || {
                entered.set(true);
                Ok(())
            },
            GridSize::DEFAULT,
            Some(1),
        )
        .expect("display comes up");

        assert!(entered.get());
        assert_eq!(session.tick_count, 0);
        assert_eq!(session.snake.head(), Position { x: 20, y: 15 });
    }

    #[test]
    fn quit_stops_before_the_next_tick() {
        let (_, mut session) = start(|| Ok(()), GridSize::DEFAULT, Some(3)).expect("start");
        let mut surface = CountingSurface::default();
        let mut input = ScriptedInput {
            batches: VecDeque::from(vec![vec![], vec![GameInput::Quit]]),
        };

        let end = run_loop(&mut surface, &mut input, &mut session, Duration::ZERO)
            .expect("loop runs");

        assert_eq!(end, RunEnd::Quit);
        assert_eq!(session.tick_count, 1);
        assert_eq!(surface.frames, 2);
    }

    #[test]
    fn loop_ends_on_wall_collision() {
        let (_, mut session) = start(|| Ok(()), GridSize::DEFAULT, Some(4)).expect("start");
        session.food = Position { x: 0, y: 0 };
        let mut surface = CountingSurface::default();
        let mut input = ScriptedInput {
            batches: VecDeque::from(vec![vec![GameInput::Direction(Direction::Up)]]),
        };

        let end = run_loop(&mut surface, &mut input, &mut session, Duration::ZERO)
            .expect("loop runs");

        assert_eq!(end, RunEnd::Collided);
        assert_eq!(session.status, GameStatus::Terminal);
        assert_eq!(session.snake.head(), Position { x: 20, y: -1 });
        assert_eq!(session.tick_count, 16);
    }
}
