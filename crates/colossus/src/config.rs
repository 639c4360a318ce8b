// Chunk: docs/chunks/config_file - Optional JSON configuration
//!
//! Configuration file support.
//!
//! The configuration lives at `<config_dir>/colossus/config.json`
//! (`~/.config/colossus/config.json` on Linux). Every field is optional and
//! takes its default when absent. A missing file means defaults; an unreadable
//! or malformed file is reported to the caller, which logs it and carries on
//! with defaults (graceful degradation, never a startup failure).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::font_scale;
use crate::palette::PaletteConfig;
use colossus_launch::DEFAULT_FALLBACK_SHELL;

/// Directory name under the platform config directory.
const APP_DIR: &str = "colossus";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Default diagnostic log location.
pub const DEFAULT_LOG_PATH: &str = "/tmp/colossus-terminal.log";

/// Errors reading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Initial window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 700,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of the window title.
    pub app_name: String,
    /// Diagnostic log file, truncated at each start.
    pub log_path: PathBuf,
    /// Shell used when `$SHELL` is unset or empty.
    pub fallback_shell: String,
    pub default_size: WindowSize,
    /// Font scale at startup, clamped into the zoom range.
    pub initial_font_scale: f64,
    /// Value of `TERM` for the child.
    pub term: String,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "COLOSSUS".to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            fallback_shell: DEFAULT_FALLBACK_SHELL.to_string(),
            default_size: WindowSize::default(),
            initial_font_scale: font_scale::DEFAULT_SCALE,
            term: "xterm-256color".to_string(),
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    /// Reads a config file. A file that does not exist yields defaults.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut config: Config =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.initial_font_scale = font_scale::clamp_scale(config.initial_font_scale);
        Ok(config)
    }

    /// Reads the config from its platform location.
    ///
    /// Returns defaults, plus the error to report, when the file cannot be used.
    pub fn load() -> (Config, Option<ConfigError>) {
        let Some(path) = config_file_path() else {
            return (Config::default(), None);
        };
        match Config::load_from(&path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Environment variables added to the child's inherited environment.
    pub fn child_env(&self) -> Vec<(String, String)> {
        vec![
            ("TERM".to_string(), self.term.clone()),
            ("COLORTERM".to_string(), "truecolor".to_string()),
        ]
    }
}

/// Returns the config file location, if the platform has a config directory.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}
