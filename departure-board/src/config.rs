//! Board options.
//!
//! Options live in a JSON file written by the add-on supervisor. It is
//! re-read on every departures request so edits apply without a restart.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{DEFAULT_MAX_ROWS, DEFAULT_TIME_WINDOW};

/// Default location of the options file.
pub const DEFAULT_OPTIONS_PATH: &str = "/data/options.json";

/// Station shown when the options name none or an unusable one.
pub const DEFAULT_START_STATION: &str = "PAD";

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "LDB_API_KEY";

/// Departure board options.
///
/// Unknown fields are ignored, so options meant for the front end (such as
/// `refresh_interval`) do not break loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Live departure board API key; blank means synthetic data only
    #[serde(default)]
    pub api_key: String,
    /// Station shown when a request names none
    #[serde(default = "default_start_station")]
    pub start_station: String,
    /// Destination filter; blank means all departures
    #[serde(default)]
    pub destination_station: String,
    #[serde(default = "default_max_departures")]
    pub max_departures: u32,
    /// Minutes ahead of now to include on the board
    #[serde(default = "default_time_window")]
    pub time_window: u32,
}

fn default_start_station() -> String {
    DEFAULT_START_STATION.to_string()
}

fn default_max_departures() -> u32 {
    DEFAULT_MAX_ROWS as u32
}

fn default_time_window() -> u32 {
    DEFAULT_TIME_WINDOW as u32
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            start_station: default_start_station(),
            destination_station: String::new(),
            max_departures: default_max_departures(),
            time_window: default_time_window(),
        }
    }
}

impl BoardConfig {
    /// Load options from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load options from `path`, falling back to defaults.
    ///
    /// When the file cannot be loaded the defaults are written in its place
    /// if possible, so the supervisor has something to edit.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default options");
                let config = Self::default();
                if !path.exists()
                    && let Err(e) = config.save(path)
                {
                    debug!(path = %path.display(), error = %e, "could not write default options");
                }
                config
            }
        }
    }

    /// Load options as [`Self::load_or_default`] does, then apply the
    /// `LDB_API_KEY` environment override.
    pub fn current<P: AsRef<Path>>(path: P) -> Self {
        Self::load_or_default(path).with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replace the API key with `key` when it is set and not blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        self
    }

    fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn defaults_match_board_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.api_key, "");
        assert_eq!(config.start_station, "PAD");
        assert_eq!(config.destination_station, "");
        assert_eq!(config.max_departures, 10);
        assert_eq!(config.time_window, 120);
    }

    #[test]
    fn load_full_options() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.json");
        fs::write(
            &path,
            r#"{
                "api_key": "secret",
                "start_station": "WAT",
                "destination_station": "GLD",
                "refresh_interval": 60,
                "max_departures": 5,
                "time_window": 60
            }"#,
        )
        .unwrap();

        let config = BoardConfig::load(&path).unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.start_station, "WAT");
        assert_eq!(config.destination_station, "GLD");
        assert_eq!(config.max_departures, 5);
        assert_eq!(config.time_window, 60);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{ "api_key": "secret" }"#).unwrap();

        let config = BoardConfig::load(&path).unwrap();

        assert_eq!(
            config,
            BoardConfig {
                api_key: "secret".to_string(),
                ..BoardConfig::default()
            }
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = BoardConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            BoardConfig::load(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn load_or_default_writes_defaults_when_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.json");

        let config = BoardConfig::load_or_default(&path);

        assert_eq!(config, BoardConfig::default());
        assert_eq!(BoardConfig::load(&path).unwrap(), BoardConfig::default());
    }

    #[test]
    fn load_or_default_keeps_unparsable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, "{ not json").unwrap();

        let config = BoardConfig::load_or_default(&path);

        assert_eq!(config, BoardConfig::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn load_or_default_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("options.json");

        assert_eq!(BoardConfig::load_or_default(&path), BoardConfig::default());
        assert_eq!(BoardConfig::load(&path).unwrap(), BoardConfig::default());
    }

    #[test]
    fn load_or_default_tolerates_unwritable_location() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("options.json");

        assert_eq!(BoardConfig::load_or_default(&path), BoardConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn api_key_override() {
        let config = BoardConfig::default().with_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.api_key, "from-env");

        let config = BoardConfig {
            api_key: "from-file".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(
            config.clone().with_api_key_override(None).api_key,
            "from-file"
        );
        assert_eq!(
            config.with_api_key_override(Some("  ".to_string())).api_key,
            "from-file"
        );
    }
}
