//! Application configuration.
//!
//! Settings come from a JSON file, by default
//! `$XDG_CONFIG_HOME/whisperer/config.json`. Every field is optional:
//!
//! ```json
//! {
//!   "endpoint": "https://my-api.plantnet.org/v2/identify",
//!   "api_key": "2b10...",
//!   "timeout_secs": 30
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ResultExt, WhispererError};

/// Base URL of the identification service; `/all` is appended per call.
pub const DEFAULT_ENDPOINT: &str = "https://my-api.plantnet.org/v2/identify";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads `path` if given, otherwise the XDG config file if it exists,
    /// otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns `WhispererError::FileSystem` if an explicit path cannot be read
    /// Returns `WhispererError::Configuration` if the file is not valid JSON
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads and parses one configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WhispererError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid configuration file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The XDG configuration file, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("whisperer").find_config_file("config.json")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_key":"secret"}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "endpoint = nope").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, WhispererError::Configuration { .. }));
        assert!(err.to_string().contains("Invalid configuration file"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/no/such/whisperer.json"))).unwrap_err();
        assert!(matches!(err, WhispererError::FileSystem { .. }));
    }
}
