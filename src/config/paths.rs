//! Path resolution for quotebox configuration and data files.
//!
//! All quotebox data is stored in `~/.quotebox/`:
//! - `config.yaml` - Main configuration file
//! - `quotebox.db` - SQLite database backing persistent storage

use std::path::PathBuf;

use crate::error::QuoteboxError;

/// Paths to quotebox configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quotebox/`
    pub root: PathBuf,
    /// Config file: `~/.quotebox/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.quotebox/quotebox.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuoteboxError> {
        let home = std::env::var("HOME").map_err(|_| {
            QuoteboxError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quotebox")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("quotebox.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), QuoteboxError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                QuoteboxError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-quotebox");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database, root.join("quotebox.db"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".quotebox"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());

        // Second call is a no-op
        paths.ensure_dirs().unwrap();
    }
}
