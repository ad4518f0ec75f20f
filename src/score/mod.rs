//! High-score persistence
//!
//! The game persists exactly one integer, keyed like a browser would key
//! it. The store is a collaborator interface so the controller can run
//! against a file, a test double, or nothing at all.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Storage key for the single persisted value
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// Key-value collaborator holding the high score
pub trait ScoreStore {
    /// The stored high score, `None` when nothing was saved yet
    fn get(&self) -> Result<Option<u32>>;

    /// Overwrite the stored high score
    fn set(&mut self, value: u32) -> Result<()>;
}

/// Store backed by a single JSON object on disk
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self) -> Result<Option<u32>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read score file {:?}", self.path))?;
        let entries: HashMap<String, u32> = serde_json::from_str(&raw)
            .with_context(|| format!("score file {:?} is not valid JSON", self.path))?;

        Ok(entries.get(HIGH_SCORE_KEY).copied())
    }

    fn set(&mut self, value: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {:?}", parent))?;
            }
        }

        let mut entries = HashMap::new();
        entries.insert(HIGH_SCORE_KEY.to_string(), value);
        let raw = serde_json::to_string_pretty(&entries).context("failed to serialize scores")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write score file {:?}", self.path))?;

        Ok(())
    }
}

/// In-memory store for tests and sessions without persistence
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    value: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> Result<Option<u32>> {
        Ok(self.value)
    }

    fn set(&mut self, value: u32) -> Result<()> {
        self.value = Some(value);
        Ok(())
    }
}
