//! Configuration management for lyrsync.
//!
//! Loads configuration from ${LYRSYNC_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config template with comments, embedded at compile time.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

pub mod paths {
    //! Path resolution for lyrsync configuration and data directories.
    //!
    //! LYRSYNC_HOME resolution order:
    //! 1. LYRSYNC_HOME environment variable (if set)
    //! 2. ~/.config/lyrsync (default)

    use std::path::PathBuf;

    /// Returns the lyrsync home directory.
    ///
    /// Checks LYRSYNC_HOME env var first, falls back to ~/.config/lyrsync
    pub fn lyrsync_home() -> PathBuf {
        if let Ok(home) = std::env::var("LYRSYNC_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("lyrsync"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        lyrsync_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        lyrsync_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum width of the lyric region, in terminal columns
    pub text_width: usize,

    /// Height of the lyric region, in terminal rows
    pub text_height: usize,

    /// Seconds of playback kept after the last line starts
    pub buffer_seconds: f64,
}

impl Config {
    const DEFAULT_TEXT_WIDTH: usize = 60;
    const DEFAULT_TEXT_HEIGHT: usize = 15;
    const DEFAULT_BUFFER_SECONDS: f64 = 3.0;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text_width: Self::DEFAULT_TEXT_WIDTH,
            text_height: Self::DEFAULT_TEXT_HEIGHT,
            buffer_seconds: Self::DEFAULT_BUFFER_SECONDS,
        }
    }
}
