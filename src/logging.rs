use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::{APP_DIR_NAME, LOG_FILE_NAME};

/// Returns the platform-correct, per-user log file path.
#[must_use]
pub fn log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes `log` records to a file; the terminal belongs to the game.
///
/// Returns the log path on success. Errors are not fatal to the caller.
pub fn init_logging(verbose: bool) -> io::Result<PathBuf> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let path = log_path();
    let file = open_log_file(&path)?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))?;

    Ok(path)
}

/// Opens `path` for appending, creating parent directories when needed.
///
/// A symlink at `path` is refused instead of followed.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to log through symlink {}", path.display()),
            ));
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    OpenOptions::new().create(true).append(true).open(path)
}
