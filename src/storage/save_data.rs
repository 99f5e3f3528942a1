//! Persisted player profile.
//!
//! A small TOML file holding the last player name and the best lap ever
//! driven. It is read at startup and written when a race starts with a new
//! name or a lap record falls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config::get_data_dir;

/// Placeholder used for empty player names.
pub const DEFAULT_PLAYER_NAME: &str = "Piloto";

/// Longest player name kept, in characters.
pub const MAX_NAME_LEN: usize = 24;

/// Trim a player name, cap its length and fall back to the placeholder when
/// nothing is left.
pub fn sanitize_player_name(name: &str) -> String {
    let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Contents of the save file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// Name entered on the last race start
    pub last_player: Option<String>,
    /// Fastest lap in seconds
    pub best_lap_secs: Option<f64>,
    /// When the best lap was set
    pub best_lap_recorded_at: Option<DateTime<Utc>>,
}

/// Get the save file path.
pub fn get_save_path() -> PathBuf {
    get_data_dir().join("save.toml")
}

/// Save file access.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    data: SaveData,
}

impl ProfileStore {
    /// Open the store at `path` and load it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            data: SaveData::default(),
        };
        store.load();
        store
    }

    /// Open the store in the platform data directory.
    pub fn open_default() -> Self {
        Self::open(get_save_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn last_player(&self) -> Option<&str> {
        self.data.last_player.as_deref()
    }

    pub fn best_lap(&self) -> Option<f64> {
        self.data.best_lap_secs
    }

    /// Reload from disk. A missing file gives defaults; a corrupt one is
    /// logged and replaced by defaults.
    pub fn load(&mut self) -> &SaveData {
        self.data = match read_save(&self.path) {
            Ok(Some(data)) => data,
            Ok(None) => SaveData::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable save file");
                SaveData::default()
            }
        };
        &self.data
    }

    /// Remember a player name. Returns the sanitized name.
    pub fn remember_player(&mut self, name: &str) -> String {
        let name = sanitize_player_name(name);
        self.data.last_player = Some(name.clone());
        name
    }

    /// Forget the stored name.
    pub fn clear_player(&mut self) {
        self.data.last_player = None;
    }

    /// Offer a lap time. Returns true if it is a new best.
    pub fn record_lap(&mut self, secs: f64) -> bool {
        if !secs.is_finite() || secs <= 0.0 {
            return false;
        }
        let improved = self.data.best_lap_secs.map_or(true, |best| secs < best);
        if improved {
            self.data.best_lap_secs = Some(secs);
            self.data.best_lap_recorded_at = Some(Utc::now());
            tracing::info!(secs, "new best lap");
        }
        improved
    }

    /// Write to disk.
    pub fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::IoError(e.to_string()))?;
        Ok(())
    }
}

fn read_save(path: &Path) -> Result<Option<SaveData>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|e| StorageError::IoError(e.to_string()))?;
    let data = toml::from_str(&content).map_err(|e| StorageError::ParseError(e.to_string()))?;
    Ok(Some(data))
}

/// Save file errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
