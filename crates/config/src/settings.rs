// Application settings
// Loaded from ~/.config/sightings/settings.toml (or $SIGHTINGS_CONFIG)

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use sightings_engine::SearchStrategy;

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "SIGHTINGS_CONFIG";

/// Overrides `search.strategy` from the settings file.
pub const STRATEGY_ENV: &str = "SIGHTINGS_STRATEGY";

#[derive(Debug)]
pub enum ConfigError {
    /// Settings file exists but cannot be read.
    Read { path: PathBuf, reason: String },
    /// TOML parse / deserialization error.
    Parse { path: PathBuf, reason: String },
    /// Strategy name from the environment outside {linear, binary}.
    InvalidStrategy { origin: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, reason } => write!(f, "cannot read {}: {reason}", path.display()),
            Self::Parse { path, reason } => write!(f, "invalid settings in {}: {reason}", path.display()),
            Self::InvalidStrategy { origin, value } => {
                write!(f, "{origin}: invalid search method '{value}' (expected linear or binary)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    /// Preset search method. `None` asks interactively.
    pub strategy: Option<SearchStrategy>,
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sightings")
            .join("settings.toml")
    }

    /// Load settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let settings = Self::from_toml(&contents).map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(input: &str) -> Result<Self, String> {
        toml::from_str(input).map_err(|e| e.to_string())
    }

    /// Strategy preset by `$SIGHTINGS_STRATEGY` or the settings file, if any.
    pub fn preset_strategy(&self) -> Result<Option<SearchStrategy>, ConfigError> {
        self.resolve_strategy(std::env::var(STRATEGY_ENV).ok().as_deref())
    }

    /// An environment value, when present and non-blank, wins over the file.
    pub fn resolve_strategy(&self, env_value: Option<&str>) -> Result<Option<SearchStrategy>, ConfigError> {
        match env_value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidStrategy {
                    origin: STRATEGY_ENV.to_string(),
                    value: value.to_string(),
                }),
            None => Ok(self.search.strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_empty_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.search.strategy.is_none());
    }

    #[test]
    fn parse_strategy() {
        let settings = Settings::from_toml("[search]\nstrategy = \"binary\"\n").unwrap();
        assert_eq!(settings.search.strategy, Some(SearchStrategy::Binary));

        let settings = Settings::from_toml("[search]\nstrategy = \"linear\"\n").unwrap();
        assert_eq!(settings.search.strategy, Some(SearchStrategy::Linear));
    }

    #[test]
    fn parse_rejects_unknown_strategy() {
        let err = Settings::from_toml("[search]\nstrategy = \"hash\"\n").unwrap_err();
        assert!(err.contains("hash") || err.contains("variant"), "{err}");
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(Settings::from_toml("[search]\nstrategi = \"binary\"\n").is_err());
        assert!(Settings::from_toml("[output]\njson = true\n").is_err());
    }

    #[test]
    fn load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[search]\nstrategy = \"linear\"\n").unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.search.strategy, Some(SearchStrategy::Linear));
    }

    #[test]
    fn load_unparsable_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[search\nstrategy = ").unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("settings.toml"));
    }

    #[test]
    fn load_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let err = Settings::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_value_overrides_file() {
        let settings = Settings {
            search: SearchSettings { strategy: Some(SearchStrategy::Linear) },
        };
        assert_eq!(settings.resolve_strategy(Some("b")).unwrap(), Some(SearchStrategy::Binary));
        assert_eq!(settings.resolve_strategy(None).unwrap(), Some(SearchStrategy::Linear));
        assert_eq!(settings.resolve_strategy(Some("  ")).unwrap(), Some(SearchStrategy::Linear));
    }

    #[test]
    fn no_preset_anywhere() {
        assert_eq!(Settings::default().resolve_strategy(None).unwrap(), None);
    }

    #[test]
    fn invalid_env_value_is_error() {
        let err = Settings::default().resolve_strategy(Some("quick")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStrategy { .. }));
        assert!(err.to_string().starts_with(STRATEGY_ENV));
    }
}
