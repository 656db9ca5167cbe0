//! Persisted settings: the last grid size played and the best score.
//!
//! Stored as a small JSON object with the fixed keys `size` and `best`.
//! A missing or unreadable file is treated as empty.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use twenty48_core::types::Score;

const FILE_NAME: &str = ".twenty48.json";

/// The values kept between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub best: Score,
}

/// Settings bound to the file they are read from and written to.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Default location: `$HOME/.twenty48.json`, or the current directory
    /// when no home directory is set.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    /// Loads settings from `path`, falling back to defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match read_settings(&path) {
            Ok(settings) => settings,
            Err(err) => {
                if path.exists() {
                    warn!("ignoring settings in {}: {err:#}", path.display());
                }
                Settings::default()
            }
        };
        Self { path, settings }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Grid size of the last game started, if any.
    pub fn size(&self) -> Option<usize> {
        self.settings.size
    }

    pub fn best(&self) -> Score {
        self.settings.best
    }

    /// Raises the best score to `score` if it is higher and saves.
    ///
    /// # Returns
    ///
    /// `true` if `score` is a new best.
    pub fn record_score(&mut self, score: Score) -> Result<bool> {
        if score <= self.settings.best {
            return Ok(false);
        }
        self.settings.best = score;
        self.save()?;
        Ok(true)
    }

    /// Remembers `size` for the next run and saves.
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        if self.settings.size == Some(size) {
            return Ok(());
        }
        self.settings.size = Some(size);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, json + "\n")
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
