//! Configuration management.
//!
//! Configuration is read from `~/.config/gh-changelog/config.toml` (or the
//! platform equivalent) when present. Every field is optional; a missing
//! file simply means the defaults below.
//!
//! ```toml
//! feed_url = "https://github.blog/changelog/feed/"
//! timeout_secs = 10
//! title_width = 90
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

pub const DEFAULT_FEED_URL: &str = "https://github.blog/changelog/feed/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TITLE_WIDTH: usize = 90;

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed_url: String,
    pub timeout_secs: u64,
    pub title_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            title_width: DEFAULT_TITLE_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped if there is no file there.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path()?;
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path: `~/.config/gh-changelog/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("gh-changelog").join("config.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.feed_url).map_err(|e| ConfigError::InvalidFeedUrl {
            url: self.feed_url.clone(),
            source: e,
        })?;

        if self.title_width < 4 {
            return Err(ConfigError::Invalid(format!(
                "title_width must be at least 4, got {}",
                self.title_width
            )));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid feed URL {url:?}: {source}")]
    InvalidFeedUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("{0}")]
    Invalid(String),
}
