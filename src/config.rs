use crate::error::{DifflyError, Result};
use crate::options::DiffOptions;
use crate::share::MAX_PARAM_LENGTH;
use crate::types::ViewMode;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// view = "split"
///
/// [diff]
/// timeout_ms = 500
/// edit_cost = 4
///
/// [share]
/// max_param_length = 4000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff: DiffOptions,
    pub share: ShareConfig,
    pub view: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub max_param_length: usize,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            max_param_length: MAX_PARAM_LENGTH,
        }
    }
}

impl Config {
    /// `<config dir>/diffly/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diffly").join("config.toml"))
    }

    /// Loads `path`, or the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        info!("loading config from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::parse(&content, &path)
    }

    fn parse(content: &str, path: &Path) -> Result<Config> {
        toml::from_str(content).map_err(|source| DifflyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
