use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::config::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the default log file location next to the score file.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Opens `path` for appending, creating it and its parent directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Routes the `log` facade into `path`.
///
/// The terminal is owned by the game screen, so nothing is logged to stdout.
/// Earlier runs stay in the file.
pub fn init_file_logger(path: &Path, verbose: bool) -> io::Result<()> {
    let file = open_log_file(path)?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}
