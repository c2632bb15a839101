use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory name used under the platform config/data directories.
pub const APP_DIR_NAME: &str = "grid-snake";

const CONFIG_FILE_NAME: &str = "config.json";

/// Default board side length.
pub const DEFAULT_GRID_SIZE: u16 = 10;

/// Smallest board that still fits the starting snake with a free cell left.
pub const MIN_GRID_SIZE: u16 = 3;

pub const MAX_GRID_SIZE: u16 = 64;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

pub const MIN_TICK_INTERVAL_MS: u64 = 30;

pub const MAX_TICK_INTERVAL_MS: u64 = 5_000;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns an N×N grid.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Session configuration.
///
/// The JSON form uses the option names `gridSize` and `tickIntervalMs`;
/// missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: u16,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads an explicit config file, or the default one when it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };

        match Self::from_path(&path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Checks that both options are inside their supported ranges.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::TickInterval(self.tick_interval_ms));
        }

        Ok(self)
    }

    #[must_use]
    pub fn grid(self) -> GridSize {
        GridSize::square(self.grid_size)
    }

    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Returns the platform config file location, if the platform has one.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

/// Fixed terminal palette.
#[derive(Debug)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

pub const PALETTE: Palette = Palette {
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Terminal columns used to draw one logical cell; two keeps cells square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";

pub const GLYPH_SNAKE_BODY: &str = "▓▓";

pub const GLYPH_FOOD: &str = "●";
