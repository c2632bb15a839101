use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::APP_DIR_NAME;
use crate::error::StoreError;

const SCORE_FILE_NAME: &str = "scores.json";

/// Persistent best-score storage.
pub trait BestScoreStore {
    /// Returns the stored best score, or 0 when nothing was stored yet.
    fn get(&self) -> Result<u32, StoreError>;

    fn set(&mut self, best: u32) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreFile {
    best_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Best score kept as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user data location.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    /// Returns `Ok(0)` when the score file does not yet exist (first run).
    /// Returns `Err` when the file exists but cannot be read or parsed.
    fn get(&self) -> Result<u32, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.best_score)
    }

    fn set(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { best_score: best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl BestScoreStore for MemoryStore {
    fn get(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn set(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = best;
        Ok(())
    }
}
