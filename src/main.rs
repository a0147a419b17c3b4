use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use snake_arcade::app::{run_loop, start, RunEnd};
use snake_arcade::config::{GridSize, TICK_INTERVAL_MS};
use snake_arcade::error::GameError;
use snake_arcade::game::Session;
use snake_arcade::input::InputHandler;
use snake_arcade::logging::init_logging;
use snake_arcade::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food placement for a repeatable run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug events (food, rejected turns) as well.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_logging(cli.verbose) {
        Ok(path) => info!("logging to {}", path.display()),
        Err(error) => eprintln!("Warning: logging disabled: {error}"),
    }

    install_panic_hook();

    match run(cli.seed) {
        Ok((RunEnd::Collided, session)) => {
            println!(
                "Game over: length {} after {} ticks",
                session.snake.len(),
                session.tick_count
            );
            ExitCode::SUCCESS
        }
        Ok((RunEnd::Quit, session)) => {
            info!("quit after {} ticks", session.tick_count);
            ExitCode::SUCCESS
        }
        Err(error) => {
            warn!("exiting with error: {error}");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Plays one session; the terminal is restored when this returns.
fn run(seed: Option<u64>) -> Result<(RunEnd, Session), GameError> {
    let bounds = GridSize::DEFAULT;
    let (mut terminal, mut session) = start(TerminalSession::enter, bounds, seed)?;
    info!(
        "starting {}x{} board, seed {seed:?}",
        bounds.width, bounds.height
    );

    let mut input = InputHandler::new();
    let end = run_loop(
        terminal.surface_mut(),
        &mut input,
        &mut session,
        Duration::from_millis(TICK_INTERVAL_MS),
    )?;

    Ok((end, session))
}
