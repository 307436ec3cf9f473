//! TOML settings store - Implements SettingsStorePort with a small TOML file
//!
//! The file lives at `<config_dir>/skyboard/settings.toml` and holds a single
//! key:
//!
//! ```toml
//! theme = "dark"
//! ```

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SettingsStorePort;
use domain::Theme;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// On-disk shape of the settings file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Settings store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/skyboard/settings.toml`, relative to the working
    /// directory when the platform has no config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skyboard")
            .join("settings.toml")
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Option<SettingsFile> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read settings");
                return None;
            },
        };

        match toml::from_str(&content) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse settings");
                None
            },
        }
    }
}

impl SettingsStorePort for TomlSettingsStore {
    fn load_theme(&self) -> Result<Option<Theme>, ApplicationError> {
        let Some(raw) = self.read_file().and_then(|f| f.theme) else {
            return Ok(None);
        };

        match raw.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring stored theme");
                Ok(None)
            },
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ApplicationError::Storage(format!(
                    "Failed to create settings directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = SettingsFile {
            theme: Some(theme.as_str().to_string()),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| ApplicationError::Storage(format!("Failed to serialize settings: {e}")))?;

        fs::write(&self.path, content).map_err(|e| {
            ApplicationError::Storage(format!(
                "Failed to write settings {}: {e}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), %theme, "Saved theme");
        Ok(())
    }

    fn clear(&self) -> Result<(), ApplicationError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed settings");
                Ok(())
            },
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Storage(format!(
                "Failed to remove settings {}: {e}",
                self.path.display()
            ))),
        }
    }
}
