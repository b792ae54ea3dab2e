//! Persisted user preferences.
//!
//! Two values survive across sessions: the active theme name and an
//! optional custom background color in `#rrggbb` form. They live in a
//! single `prefs.toml` under the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

pub const PREFS_FILE: &str = "prefs.toml";

/// The persisted preference set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: ThemeName,
    /// Custom background color, `#rrggbb`. Absent when the user has not
    /// picked one (or escaped it via the theme toggle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_bg: Option<String>,
}

/// Handle to the on-disk preference file.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PrefsStore { dir: dir.into() }
    }

    /// Default data directory (~/.tinkerbox).
    /// Can be overridden with the TINKERBOX_DIR environment variable.
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("TINKERBOX_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tinkerbox"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn prefs_path(&self) -> PathBuf {
        self.dir.join(PREFS_FILE)
    }

    /// Load preferences, defaulting (dark theme, no custom color) when
    /// nothing has been stored yet.
    pub fn load(&self) -> Result<Prefs> {
        let path = self.prefs_path();
        if !path.exists() {
            return Ok(Prefs::default());
        }
        let contents = fs::read_to_string(&path)
            .context(format!("Failed to read preferences file: {:?}", path))?;
        toml::from_str(&contents).context(format!("Failed to parse preferences file: {:?}", path))
    }

    /// Write preferences, creating the data directory if needed.
    pub fn save(&self, prefs: &Prefs) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .context(format!("Failed to create data directory: {:?}", self.dir))?;
        let contents = toml::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        fs::write(self.prefs_path(), contents).context("Failed to write preferences file")?;
        Ok(())
    }
}
