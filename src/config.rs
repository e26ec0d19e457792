use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// What to do when a subdirectory cannot be listed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort the whole run on the first listing failure
    #[default]
    Halt,
    /// Print an "[unreadable]" marker under the directory and keep going
    Mark,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Print the root path as the first line
    pub show_root: bool,
    /// Title printed before the tree (empty = none)
    pub header: String,
    /// Listing failure policy: halt, mark
    pub on_error: ErrorPolicy,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file is used
    /// when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        tracing::debug!(path = %path.display(), "Reading config file");

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/dirtree/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirtree").join("config.toml"))
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.render.header.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(
                "render.header must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}
