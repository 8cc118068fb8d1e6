//! Front-end configuration loaded from TOML.

use super::logging::DEFAULT_LOG_FILTER;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// Configuration for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Move-list order when a game starts.
    #[serde(default)]
    initial_sort: SortOrder,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            initial_sort: SortOrder::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(initial_sort = %config.initial_sort, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] in the working
    /// directory if it exists, else the defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), path)
    }

    /// Like [`RewindConfig::load`], looking for [`DEFAULT_CONFIG_FILE`] in
    /// `dir` instead of the working directory.
    pub fn load_in(dir: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default = dir.join(DEFAULT_CONFIG_FILE);
        if default.exists() {
            Self::from_file(default)
        } else {
            debug!(dir = %dir.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
