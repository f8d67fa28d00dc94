//! Persisted level progress.
//!
//! Stored as camelCase JSON in `footballlab_progress_v1.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name inside the progress directory.
pub const PROGRESS_FILE: &str = "footballlab_progress_v1.json";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("failed to access progress file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse progress file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetPiecesProgress {
    /// Highest level the player may start.
    pub unlocked_level: u32,
}

impl Default for SetPiecesProgress {
    fn default() -> Self {
        Self { unlocked_level: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progress {
    pub set_pieces: SetPiecesProgress,
}

impl Progress {
    /// Record a completed level, unlocking the next one.
    pub fn unlock_after(&mut self, level_id: u32) {
        let next = level_id + 1;
        if next > self.set_pieces.unlocked_level {
            self.set_pieces.unlocked_level = next;
        }
    }

    pub fn is_unlocked(&self, level_id: u32) -> bool {
        level_id >= 1 && level_id <= self.set_pieces.unlocked_level
    }
}

fn progress_path(dir: &Path) -> PathBuf {
    dir.join(PROGRESS_FILE)
}

pub fn save_progress(dir: &Path, progress: &Progress) -> Result<(), ProgressError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(progress)?;
    fs::write(progress_path(dir), json)?;
    Ok(())
}

pub fn load_progress(dir: &Path) -> Result<Progress, ProgressError> {
    let json = fs::read_to_string(progress_path(dir))?;
    Ok(serde_json::from_str(&json)?)
}

/// Load progress, falling back to a fresh start if the file is missing or unreadable.
pub fn load_or_default(dir: &Path) -> Progress {
    let path = progress_path(dir);
    if !path.exists() {
        return Progress::default();
    }
    match load_progress(dir) {
        Ok(progress) => progress,
        Err(e) => {
            log::warn!("ignoring progress at {}: {e}", path.display());
            Progress::default()
        }
    }
}

/// Delete saved progress. Missing files are fine.
pub fn reset_progress(dir: &Path) -> Result<(), ProgressError> {
    let path = progress_path(dir);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}
