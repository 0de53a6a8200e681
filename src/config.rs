//! Persisted default settings
//!
//! Stores default options in ~/.config/cleanfy/config.json. Every value can be
//! overridden on the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::clean::{CaseMode, DateMode, DateStyle, TransformConfig};

/// Default options applied to every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Case transform: none, lower, upper or title
    pub case: CaseMode,
    /// Date prefix source: none, mtime or now
    pub date: DateMode,
    /// Date prefix layout: iso, compact, month, short or withtime
    pub date_style: DateStyle,
    /// Delimiter between the date prefix and the name
    pub delim: String,
    /// Resolve conflicts with numeric suffixes instead of failing
    pub unique: bool,
    /// Also process names starting with a dot
    pub dotfiles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            case: CaseMode::None,
            date: DateMode::None,
            date_style: DateStyle::Iso,
            delim: "_".to_string(),
            unique: true,
            dotfiles: false,
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if there is no file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        settings
            .transform()
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;

        debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("cleanfy").join("config.json"))
    }

    pub fn transform(&self) -> TransformConfig {
        TransformConfig {
            case: self.case,
            date: self.date,
            date_style: self.date_style,
            delimiter: self.delim.clone(),
        }
    }
}
