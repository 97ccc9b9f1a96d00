//! File System Utilities
//!
//! Configuration directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/docsite-gui/` or `$XDG_CONFIG_HOME/docsite-gui/`
/// - **macOS**: `~/Library/Application Support/io.docsite.docsite-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\docsite\docsite-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("io", "docsite", "docsite-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
