use std::io;

use thiserror::Error;

/// Failures surfaced to `main`. Collisions are game outcomes, not errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal could not be prepared for drawing.
    #[error("failed to initialize terminal: {0}")]
    Initialization(#[source] io::Error),

    /// Drawing or reading input failed mid-game.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::GameError;

    #[test]
    fn initialization_error_names_the_cause() {
        let error = GameError::Initialization(io::Error::other("no tty"));

        assert_eq!(error.to_string(), "failed to initialize terminal: no tty");
        assert!(error.source().is_some());
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<(), GameError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(GameError::Io(_))));
    }
}
