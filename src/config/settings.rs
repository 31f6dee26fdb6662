//! Optional settings, loaded from `~/.taskpad/config.yaml` when present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TaskpadError;

/// Settings file contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Color output setting.
    pub color: ColorSetting,
    /// Greeting line shown at startup; the default banner when unset.
    pub greeting: Option<String>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the global color control.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl Settings {
    /// Load settings from a file. A missing file yields the defaults; a
    /// present but malformed file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TaskpadError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(TaskpadError::Io)?;
        serde_yaml::from_str(&content)
            .map_err(|e| TaskpadError::Config(format!("Failed to parse settings: {e}")))
    }
}
