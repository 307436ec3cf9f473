//! Application configuration
//!
//! Split into focused sub-modules by section:
//! - `weather`: provider URL, API key, timeout, units
//! - `display`: theme file location and colour
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `skyboard.toml` (or the file passed explicitly), then `SKYBOARD__*`
//! environment variables such as `SKYBOARD__WEATHER__TIMEOUT_SECS`.

mod display;
mod weather;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use display::DisplayConfig;
pub use weather::{DEFAULT_BASE_URL, WeatherAppConfig};

use crate::adapters::TomlSettingsStore;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "skyboard";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYBOARD";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from defaults, a file and the environment
    ///
    /// With `path` set the file must exist; otherwise `skyboard.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("weather.base_url", DEFAULT_BASE_URL)?
            .set_default("weather.timeout_secs", 10)?
            .set_default("weather.units", "metric")?
            .set_default("display.color", true)?
            .add_source(file)
            // Override with environment variables (e.g., SKYBOARD__WEATHER__UNITS)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            base_url = %config.weather.base_url,
            has_api_key = config.weather.has_api_key(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Where the theme preference is stored
    pub fn settings_path(&self) -> PathBuf {
        self.display
            .settings_path
            .clone()
            .unwrap_or_else(TomlSettingsStore::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.weather.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.display.color);
        assert!(config.display.settings_path.is_none());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[weather]
api_key = "file-key"
timeout_secs = 4

[display]
color = false
settings_path = "/tmp/skyboard-settings.toml"
"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.weather.api_key.as_ref().map(ExposeSecret::expose_secret),
            Some("file-key")
        );
        assert_eq!(config.weather.timeout_secs, 4);
        assert_eq!(config.weather.units, "metric");
        assert!(!config.display.color);
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/tmp/skyboard-settings.toml")
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[weather]\ntimeout_secs = \"soon\"\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn settings_path_defaults_to_config_dir() {
        let config = AppConfig::default();
        assert!(config.settings_path().ends_with("skyboard/settings.toml"));
    }

    #[test]
    fn serialization_skips_api_key() {
        let mut config = AppConfig::default();
        config.weather.apply_api_key_override(Some("secret"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
