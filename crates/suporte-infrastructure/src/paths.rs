//! Path resolution for suporte configuration files.
//!
//! ```text
//! ~/.config/suporte/      # Config directory (platform equivalent elsewhere)
//! └── config.toml         # IntakeConfig overrides
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR: &str = "suporte";
const CONFIG_FILE: &str = "config.toml";

/// Unified path management for suporte.
pub struct SuportePaths;

impl SuportePaths {
    /// Returns the suporte configuration directory (e.g. `~/.config/suporte/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
