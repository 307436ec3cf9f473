//! Display settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Terminal display configuration (`[display]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Override for the theme preference file
    #[serde(default)]
    pub settings_path: Option<PathBuf>,

    /// Colored output (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            color: true,
        }
    }
}
