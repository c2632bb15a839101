use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{MAX_GRID_SIZE, MAX_TICK_INTERVAL_MS, MIN_GRID_SIZE, MIN_TICK_INTERVAL_MS};

/// A direction name that is not one of the four cardinal directions.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(pub String);

/// Snake construction failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    #[error("snake body must contain at least one segment")]
    EmptyBody,
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid size {0} is out of range ({min}..={max})", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(u16),
    #[error("tick interval {0}ms is out of range ({min}..={max})", min = MIN_TICK_INTERVAL_MS, max = MAX_TICK_INTERVAL_MS)]
    TickInterval(u64),
}

/// Best-score store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score store holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level failures of the terminal binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
