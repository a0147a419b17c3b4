use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::error::GameError;
use crate::renderer::TerminalSurface;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game run.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    surface: TerminalSurface<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates the drawing surface.
    pub fn enter() -> Result<Self, GameError> {
        enable_raw_mode().map_err(GameError::Initialization)?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(GameError::Initialization(error));
        }

        let backend = CrosstermBackend::new(stdout);
        match AppTerminal::new(backend) {
            Ok(terminal) => Ok(Self {
                surface: TerminalSurface::new(terminal),
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(GameError::Initialization(error))
            }
        }
    }

    /// Returns the surface frames are drawn on.
    pub fn surface_mut(&mut self) -> &mut TerminalSurface<CrosstermBackend<io::Stdout>> {
        &mut self.surface
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
