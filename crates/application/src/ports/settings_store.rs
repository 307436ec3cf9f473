//! Settings store port
//!
//! Persistence for the user's theme preference.

#[cfg(test)]
use mockall::automock;

use domain::Theme;

use crate::error::ApplicationError;

/// Port for persisting user settings
#[cfg_attr(test, automock)]
pub trait SettingsStorePort: Send + Sync {
    /// Load the stored theme; `None` when nothing valid is stored
    fn load_theme(&self) -> Result<Option<Theme>, ApplicationError>;

    /// Persist the theme
    fn save_theme(&self, theme: Theme) -> Result<(), ApplicationError>;

    /// Remove any stored preference
    fn clear(&self) -> Result<(), ApplicationError>;
}
