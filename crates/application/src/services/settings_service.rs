//! Settings service
//!
//! Holds the effective theme. It is initialized once from the store, falling
//! back to the system preference, and changed only through [`SettingsService::set_theme`]
//! (or [`SettingsService::reset_theme`]), which write through to the store.

use std::sync::Arc;

use domain::Theme;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::ApplicationError;
use crate::ports::SettingsStorePort;

/// Where the effective theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Loaded from or saved to the store
    Stored,
    /// Derived from the system preference
    System,
}

#[derive(Debug, Clone, Copy)]
struct ThemeState {
    theme: Theme,
    source: ThemeSource,
}

/// Theme settings object passed to the presentation layer
pub struct SettingsService {
    store: Arc<dyn SettingsStorePort>,
    system_theme: Theme,
    state: RwLock<ThemeState>,
}

impl std::fmt::Debug for SettingsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsService")
            .field("system_theme", &self.system_theme)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl SettingsService {
    /// Initialize from the store, using `system_theme` when nothing is stored
    ///
    /// A failing store is logged and treated as empty.
    pub fn initialize(store: Arc<dyn SettingsStorePort>, system_theme: Theme) -> Self {
        let state = match store.load_theme() {
            Ok(Some(theme)) => {
                debug!(%theme, "Using stored theme");
                ThemeState {
                    theme,
                    source: ThemeSource::Stored,
                }
            },
            Ok(None) => ThemeState {
                theme: system_theme,
                source: ThemeSource::System,
            },
            Err(e) => {
                warn!(error = %e, "Failed to load theme preference, using system theme");
                ThemeState {
                    theme: system_theme,
                    source: ThemeSource::System,
                }
            },
        };

        Self {
            store,
            system_theme,
            state: RwLock::new(state),
        }
    }

    /// The effective theme
    pub fn theme(&self) -> Theme {
        self.state.read().theme
    }

    /// Where the effective theme came from
    pub fn source(&self) -> ThemeSource {
        self.state.read().source
    }

    /// Persist and apply a theme
    ///
    /// The in-memory theme only changes once the store accepted it.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ApplicationError> {
        let mut state = self.state.write();
        self.store.save_theme(theme)?;
        *state = ThemeState {
            theme,
            source: ThemeSource::Stored,
        };
        info!(%theme, "Theme updated");
        Ok(())
    }

    /// Switch between light and dark, returning the new theme
    pub fn toggle_theme(&self) -> Result<Theme, ApplicationError> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Forget the stored preference and follow the system again
    pub fn reset_theme(&self) -> Result<Theme, ApplicationError> {
        let mut state = self.state.write();
        self.store.clear()?;
        *state = ThemeState {
            theme: self.system_theme,
            source: ThemeSource::System,
        };
        info!(theme = %self.system_theme, "Theme preference cleared");
        Ok(self.system_theme)
    }
}
