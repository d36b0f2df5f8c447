//! Atomic file replacement for menu documents.
//!
//! Implements atomic writes using:
//! 1. Write to temp file with unique PID+TID suffix
//! 2. fsync to ensure data reaches disk
//! 3. Optional backup of the previous file
//! 4. Atomic rename to target path

use crate::config::PathsConfig;
use crate::error::{MenuError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;
use tracing::{debug, warn};

/// Write `contents` to `path` atomically.
///
/// The previous file, if any, stays untouched until the final rename, so a
/// failed write never leaves a truncated document behind. With `keep_backup`
/// the previous file is copied to `<name>.xml.bak` first.
pub fn atomic_write_text(path: &Path, contents: &str, keep_backup: bool) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MenuError::Io {
                message: format!("Failed to create directory {}", parent.display()),
                path: Some(parent.to_path_buf()),
                source: Some(e),
            })?;
        }
    }

    let temp_path = temp_path_for(path);

    if let Err(e) = write_synced(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    if keep_backup && path.exists() {
        let backup_path = path.with_extension(PathsConfig::BACKUP_EXTENSION);
        if let Err(e) = fs::copy(path, &backup_path) {
            warn!("Failed to create backup {}: {}", backup_path.display(), e);
        } else {
            debug!("Created backup: {}", backup_path.display());
        }
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(MenuError::Io {
            message: format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            ),
            path: Some(path.to_path_buf()),
            source: Some(e),
        });
    }

    debug!("Atomically wrote {}", path.display());
    Ok(())
}

fn write_synced(temp_path: &Path, contents: &str) -> Result<()> {
    let io_err = |action: &str, e: std::io::Error| MenuError::Io {
        message: format!("Failed to {} temp file {}", action, temp_path.display()),
        path: Some(temp_path.to_path_buf()),
        source: Some(e),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| io_err("create", e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| io_err("write", e))?;
    file.flush().map_err(|e| io_err("flush", e))?;
    file.sync_all().map_err(|e| io_err("sync", e))?;
    Ok(())
}

/// Sibling temp file: `menus.xml` -> `menus.xml.<pid>.<tid>.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(
        ".{}.{}.{}",
        process::id(),
        thread_id(),
        PathsConfig::TEMP_SUFFIX
    ));
    path.with_file_name(name)
}

/// Get a unique thread identifier.
fn thread_id() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_and_replace() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menus.xml");

        atomic_write_text(&path, "<shell/>", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<shell/>");

        atomic_write_text(&path, "<shell></shell>", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<shell></shell>");
        assert!(!path.with_extension("xml.bak").exists());
    }

    #[test]
    fn test_atomic_write_creates_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menus.xml");

        atomic_write_text(&path, "first", true).unwrap();
        atomic_write_text(&path, "second", true).unwrap();

        let backup_path = path.with_extension("xml.bak");
        assert_eq!(fs::read_to_string(&backup_path).unwrap(), "first");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_atomic_write_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("menus.xml");

        atomic_write_text(&path, "<shell/>", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menus.xml");

        atomic_write_text(&path, "<shell/>", true).unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["menus.xml".to_string()]);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("menus.xml");
        atomic_write_text(&path, "original", false).unwrap();

        // A directory squatting on the temp path makes the write fail.
        fs::create_dir(temp_path_for(&path)).unwrap();
        let err = atomic_write_text(&path, "replacement", false).unwrap_err();

        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
