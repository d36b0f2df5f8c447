//! Platform-specific path utilities.
//!
//! This module provides functions to get platform-specific paths for:
//! - The user's menu document
//! - Directories holding installed application entries

use crate::config::{MenuConfig, PathsConfig};
use crate::error::{MenuError, Result};
use std::path::PathBuf;

/// Directory holding the shell's data files.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/gesture-shell` (XDG_DATA_HOME)
/// - **Windows**: `%APPDATA%\gesture-shell`
/// - **macOS**: `~/Library/Application Support/gesture-shell`
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| MenuError::Config {
        message: "Could not determine data directory".to_string(),
    })?;
    Ok(base.join(PathsConfig::APP_DIR_NAME))
}

/// Default location of the user's menu document.
pub fn default_menu_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(MenuConfig::MENU_FILE_NAME))
}

/// Directories searched for installed application entries.
///
/// # Platform Behavior
/// - **Linux**: `~/.local/share/applications`, then each `$XDG_DATA_DIRS`
///   entry (default `/usr/local/share:/usr/share`) joined with `applications`
/// - **Other platforms**: none; launch items are checked against an explicit
///   registry instead
pub fn application_dirs() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let mut result = Vec::new();
        if let Some(data) = dirs::data_dir() {
            result.push(data.join("applications"));
        }

        let system_dirs = std::env::var("XDG_DATA_DIRS")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());
        for dir in system_dirs.split(':').filter(|d| !d.is_empty()) {
            let candidate = PathBuf::from(dir).join("applications");
            if !result.contains(&candidate) {
                result.push(candidate);
            }
        }
        result
    }

    #[cfg(not(target_os = "linux"))]
    {
        Vec::new()
    }
}
