//! `config.toml` for the `wire` binary.
//!
//! Precedence is defaults < file < command-line flags. A missing file at
//! the default location is not an error; a missing file passed explicitly
//! with `--config` is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::cli::LogLevel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireConfig {
    pub preview: PreviewConfig,
    pub editor: EditorConfig,
    pub save: SaveConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Render width; 0 uses the terminal width
    pub width: usize,
    pub alternate_screen: bool,
    /// Stay on the current screen across reloads when it still exists
    pub keep_screen_on_reload: bool,
    pub tick_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 0,
            alternate_screen: true,
            keep_screen_on_reload: true,
            tick_ms: 250,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Reload the schema when the file changes
    pub watch: bool,
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            watch: true,
            debounce_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Where Ctrl+S writes; defaults to `<file>.export.json` beside the input
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    /// Log file for the interactive preview; without one it logs nowhere
    pub file: Option<PathBuf>,
}

impl WireConfig {
    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::default_config_path()?;
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("wireway").join("config.toml"))
    }

    /// Save target for `input`: the configured path, else
    /// `<stem>.export.json` next to it.
    pub fn save_path_for(&self, input: &Path) -> PathBuf {
        if let Some(path) = &self.save.path {
            return path.clone();
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "wireframe".to_owned());
        input.with_file_name(format!("{stem}.export.json"))
    }
}
