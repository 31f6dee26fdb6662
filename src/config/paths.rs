//! Path resolution for taskpad configuration and data files.
//!
//! All taskpad data lives in `~/.taskpad/`:
//! - `config.yaml` - Optional settings file
//! - `state.json` - Persisted tasks and notes

use std::path::PathBuf;

use crate::error::TaskpadError;

/// Paths to taskpad configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskpad/`
    pub root: PathBuf,
    /// Settings file: `~/.taskpad/config.yaml`
    pub config_file: PathBuf,
    /// Persisted state: `~/.taskpad/state.json`
    pub state_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskpadError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskpadError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskpad")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            state_file: root.join("state.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskpadError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskpadError::Config(format!(
                    "Failed to create directory {:?}: {e}",
                    self.root
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".taskpad"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-taskpad");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.state_file, root.join("state.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("data"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
