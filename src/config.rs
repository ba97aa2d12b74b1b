//! Workspace configuration
//!
//! The workspace root is an explicit value handed in by the host at startup,
//! never ambient global state. `None` means "no workspace open": every scan
//! against such a configuration yields an empty result.
//!
//! # Environment Variables
//!
//! - `PROSCOUT_WORKSPACE_ROOT`: workspace root path - optional
//! - `PROSCOUT_PROJECT_SUFFIX`: project-file suffix without the dot - default: "pro"

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default project-file suffix (qmake convention)
pub const DEFAULT_PROJECT_SUFFIX: &str = "pro";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configured root does not exist on disk
    #[error("Workspace root does not exist: {0:?}")]
    RootNotFound(PathBuf),

    /// Configured root exists but is not a directory
    #[error("Workspace root is not a directory: {0:?}")]
    RootNotADirectory(PathBuf),

    /// Suffix must be a bare extension, e.g. "pro"
    #[error("Invalid project suffix: {0:?}")]
    InvalidSuffix(String),
}

/// Configuration for workspace scanning
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Root directory the host is currently open on, if any
    pub workspace_root: Option<PathBuf>,

    /// Project-file suffix without the leading dot
    pub project_suffix: String,
}

impl WorkspaceConfig {
    pub fn new(workspace_root: Option<PathBuf>) -> Self {
        Self {
            workspace_root,
            project_suffix: DEFAULT_PROJECT_SUFFIX.to_string(),
        }
    }

    /// Configuration with no workspace open
    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.project_suffix = suffix.into();
        self
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let workspace_root = env::var("PROSCOUT_WORKSPACE_ROOT")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let project_suffix = env::var("PROSCOUT_PROJECT_SUFFIX")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROJECT_SUFFIX.to_string());

        Self {
            workspace_root,
            project_suffix,
        }
    }

    /// Validate the configuration
    ///
    /// An absent workspace root is valid (empty tree); a configured root that
    /// is missing or not a directory is not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_suffix.is_empty() || self.project_suffix.contains('.') {
            return Err(ConfigError::InvalidSuffix(self.project_suffix.clone()));
        }

        if let Some(root) = &self.workspace_root {
            if !root.exists() {
                return Err(ConfigError::RootNotFound(root.clone()));
            }
            if !root.is_dir() {
                return Err(ConfigError::RootNotADirectory(root.clone()));
            }
        }

        Ok(())
    }

    /// Suffix with the leading dot, as it appears in file names
    pub fn suffix_pattern(&self) -> String {
        format!(".{}", self.project_suffix)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_suffix() {
        let config = WorkspaceConfig::new(Some(PathBuf::from("/ws")));
        assert_eq!(config.project_suffix, "pro");
        assert_eq!(config.suffix_pattern(), ".pro");
    }

    #[test]
    fn test_empty_workspace_is_valid() {
        let config = WorkspaceConfig::empty();
        assert!(config.validate().is_ok());
        assert!(config.workspace_root.is_none());
    }

    #[test]
    fn test_validate_existing_root() {
        let temp = TempDir::new().unwrap();
        let config = WorkspaceConfig::new(Some(temp.path().to_path_buf()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_root() {
        let config = WorkspaceConfig::new(Some(PathBuf::from("/nonexistent/workspace")));
        match config.validate() {
            Err(ConfigError::RootNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/workspace"));
            }
            other => panic!("Expected RootNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_root_is_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("ws.pro");
        std::fs::write(&file_path, "TEMPLATE = app").unwrap();

        let config = WorkspaceConfig::new(Some(file_path.clone()));
        match config.validate() {
            Err(ConfigError::RootNotADirectory(path)) => assert_eq!(path, file_path),
            other => panic!("Expected RootNotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_bad_suffix() {
        let config = WorkspaceConfig::empty().with_suffix(".pro");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSuffix(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var("PROSCOUT_WORKSPACE_ROOT", "/tmp/workspace");
        env::set_var("PROSCOUT_PROJECT_SUFFIX", "pri");

        let config = WorkspaceConfig::from_env();
        assert_eq!(config.workspace_root, Some(PathBuf::from("/tmp/workspace")));
        assert_eq!(config.project_suffix, "pri");

        env::remove_var("PROSCOUT_WORKSPACE_ROOT");
        env::remove_var("PROSCOUT_PROJECT_SUFFIX");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("PROSCOUT_WORKSPACE_ROOT");
        env::remove_var("PROSCOUT_PROJECT_SUFFIX");

        let config = WorkspaceConfig::from_env();
        assert!(config.workspace_root.is_none());
        assert_eq!(config.project_suffix, "pro");
    }
}
